use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use wayfarer_api_types::search::Place;

/// Badge colors for the place types the travel graph knows about. Anything
/// else gets the neutral gray.
pub(crate) fn type_color(place_type: &str) -> &'static str {
    match place_type {
        "City" => "#10b981",
        "Attraction" => "#f59e0b",
        "Restaurant" => "#ef4444",
        "Hotel" => "#8b5cf6",
        "Beach" => "#06b6d4",
        "Temple" => "#f97316",
        _ => "#6b7280",
    }
}

/// Relevance as a whole percentage, clamped so a malformed score can't blow
/// past the bar.
pub(crate) fn score_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub(crate) fn score_label(score: f64) -> String {
    format!("{score:.3}")
}

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let color = type_color(&place.place_type);
    let percent = score_percent(place.score);
    let Place {
        name,
        place_type,
        location,
        tags,
        score,
        ..
    } = place;

    view! {
        <div class="result-card">
            <div class="result-header">
                <div>
                    <div class="result-title">{name}</div>
                    <div class="result-location">
                        <Icon icon=i::FaLocationDotSolid />
                        {location}
                    </div>
                </div>
                <span class="result-type" style=format!("background-color: {color}")>
                    {place_type}
                </span>
            </div>
            <div class="result-score">
                <span>"Relevance:"</span>
                <div class="score-bar">
                    <div class="score-fill" style=format!("width: {percent}%")></div>
                </div>
                <span class="score-value">{score_label(score)}</span>
            </div>
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <div class="result-tags">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <span class="tag">{tag}</span> })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, place_type: &str, score: f64, tags: &[&str]) -> Place {
        Place {
            id: "p1".to_string(),
            name: name.to_string(),
            place_type: place_type.to_string(),
            location: "Vietnam".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            score,
        }
    }

    fn render(place: Place) -> String {
        let owner = Owner::new();
        owner.set();
        view! { <PlaceCard place /> }.to_html()
    }

    #[test]
    fn type_colors_cover_the_fixed_table() {
        assert_eq!(type_color("City"), "#10b981");
        assert_eq!(type_color("Attraction"), "#f59e0b");
        assert_eq!(type_color("Restaurant"), "#ef4444");
        assert_eq!(type_color("Hotel"), "#8b5cf6");
        assert_eq!(type_color("Beach"), "#06b6d4");
        assert_eq!(type_color("Temple"), "#f97316");
        assert_eq!(type_color("Volcano"), "#6b7280");
        assert_eq!(type_color(""), "#6b7280");
    }

    #[test]
    fn score_display_rounds_and_clamps() {
        assert_eq!(score_percent(0.0), 0);
        assert_eq!(score_percent(1.0), 100);
        assert_eq!(score_percent(0.874), 87);
        assert_eq!(score_percent(0.875), 88);
        assert_eq!(score_percent(-0.5), 0);
        assert_eq!(score_percent(3.2), 100);
        assert_eq!(score_label(0.0), "0.000");
        assert_eq!(score_label(1.0), "1.000");
        assert_eq!(score_label(0.874), "0.874");
    }

    #[test]
    fn markup_in_fields_is_escaped() {
        let html = render(place(
            "<script>alert(1)</script>",
            "<b>City</b>",
            0.5,
            &["<i>x</i>"],
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<b>City</b>"));
        assert!(!html.contains("<i>x</i>"));
    }

    #[test]
    fn score_extremes_render_matching_bar_and_label() {
        let zero = render(place("A", "City", 0.0, &[]));
        assert!(zero.contains("width: 0%"));
        assert!(zero.contains("0.000"));

        let one = render(place("B", "City", 1.0, &[]));
        assert!(one.contains("width: 100%"));
        assert!(one.contains("1.000"));
    }

    #[test]
    fn unknown_type_falls_back_to_gray_badge() {
        let html = render(place("A", "Waterfall", 0.4, &[]));
        assert!(html.contains("background-color: #6b7280"));
    }

    #[test]
    fn empty_tags_render_no_chips() {
        let html = render(place("A", "City", 0.4, &[]));
        assert!(!html.contains("result-tags"));

        let tagged = render(place("A", "City", 0.4, &["food", "nightlife"]));
        assert_eq!(tagged.matches("class=\"tag\"").count(), 2);
    }
}
