use leptos::prelude::*;
use wayfarer_api_types::search::Connection;

/// Badge colors for the relationship kinds the graph emits; unknown kinds
/// share the gray fallback with unknown place types.
pub(crate) fn relationship_color(relationship: &str) -> &'static str {
    match relationship {
        "Connected_To" => "#10b981",
        "Located_In" => "#3b82f6",
        "Near" => "#f59e0b",
        "Similar_To" => "#8b5cf6",
        _ => "#6b7280",
    }
}

/// Relationship names come underscore_cased off the wire.
pub(crate) fn relationship_label(relationship: &str) -> String {
    relationship.replace('_', " ")
}

#[component]
pub fn ConnectionCard(connection: Connection) -> impl IntoView {
    let color = relationship_color(&connection.relationship);
    let label = relationship_label(&connection.relationship);
    let Connection {
        to,
        connection_type,
        ..
    } = connection;

    view! {
        <div class="connection-card">
            <strong class="connection-target">{to}</strong>
            <span class="connection-type" style=format!("background-color: {color}")>
                {connection_type}
            </span>
            <small class="connection-relationship">{label}</small>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(to: &str, connection_type: &str, relationship: &str) -> Connection {
        Connection {
            from: "p1".to_string(),
            to: to.to_string(),
            connection_type: connection_type.to_string(),
            relationship: relationship.to_string(),
        }
    }

    fn render(connection: Connection) -> String {
        let owner = Owner::new();
        owner.set();
        view! { <ConnectionCard connection /> }.to_html()
    }

    #[test]
    fn relationship_colors_cover_the_fixed_table() {
        assert_eq!(relationship_color("Connected_To"), "#10b981");
        assert_eq!(relationship_color("Located_In"), "#3b82f6");
        assert_eq!(relationship_color("Near"), "#f59e0b");
        assert_eq!(relationship_color("Similar_To"), "#8b5cf6");
        assert_eq!(relationship_color("Twinned_With"), "#6b7280");
    }

    #[test]
    fn every_underscore_becomes_a_space() {
        assert_eq!(relationship_label("Located_In"), "Located In");
        assert_eq!(relationship_label("Part_Of_Region"), "Part Of Region");
        assert_eq!(relationship_label("Near"), "Near");
    }

    #[test]
    fn target_name_is_escaped() {
        let html = render(connection(
            "<script>alert(1)</script>",
            "City",
            "Located_In",
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn unknown_relationship_gets_gray_badge() {
        let html = render(connection("Hue", "City", "Twinned_With"));
        assert!(html.contains("background-color: #6b7280"));
        assert!(html.contains("Twinned With"));
    }
}
