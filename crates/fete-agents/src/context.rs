use fete_models::PartyRequest;

use crate::duration::PartyDuration;

/// Render a validated request into the natural-language context handed to the
/// specialists. Infallible; field order is fixed, absent optionals are
/// omitted, and the output always ends with an instruction line referencing
/// the planning focus.
pub fn render_party_context(request: &PartyRequest, duration: Option<&PartyDuration>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Occasion: {}", request.occasion));
    lines.push(format!("Planning focus: {}", request.planning_focus));

    if let Some(count) = request.guest_count {
        lines.push(format!("Guest count: {count}"));
    }
    if let Some(location) = request.location {
        lines.push(format!("Location: {}", location.as_str()));
    }
    if let (Some(start), Some(end)) = (&request.start_time, &request.end_time) {
        lines.push(format!("Party time: {start} to {end}"));
        if let Some(d) = duration {
            lines.push(d.to_string());
        }
    }
    if let Some(time_of_day) = request.time_of_day {
        lines.push(format!("Time of day: {}", time_of_day.as_str()));
    }
    if let Some(dietary) = &request.dietary_restrictions {
        lines.push(format!("Dietary restrictions: {dietary}"));
    }
    if let Some(ages) = request.guest_ages {
        lines.push(format!("Guest ages: {}", ages.as_str()));
    }
    if let Some(special) = &request.special_requests {
        lines.push(format!("Special requests: {special}"));
    }

    lines.push(format!(
        "Plan the appropriate specialist aspects for this party, focusing on: {}.",
        request.planning_focus
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::compute_duration;
    use fete_models::{GuestAges, Location, TimeOfDay};

    fn full_request() -> PartyRequest {
        PartyRequest {
            occasion: "birthday".to_string(),
            planning_focus: "food".to_string(),
            guest_count: Some(8),
            location: Some(Location::Indoor),
            start_time: Some("14:00".to_string()),
            end_time: Some("17:00".to_string()),
            time_of_day: Some(TimeOfDay::Afternoon),
            dietary_restrictions: Some("no nuts".to_string()),
            guest_ages: Some(GuestAges::Kids),
            special_requests: Some("dinosaur theme".to_string()),
        }
    }

    #[test]
    fn minimal_request_renders_two_lines_plus_instruction() {
        let request = PartyRequest::minimal("birthday", "food");
        let context = render_party_context(&request, None);
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Occasion: birthday");
        assert_eq!(lines[1], "Planning focus: food");
        assert!(lines[2].contains("focusing on: food"));
    }

    #[test]
    fn absent_fields_never_appear() {
        let request = PartyRequest::minimal("birthday", "food");
        let context = render_party_context(&request, None);

        for label in [
            "Guest count:",
            "Location:",
            "Party time:",
            "Duration:",
            "Time of day:",
            "Dietary restrictions:",
            "Guest ages:",
            "Special requests:",
        ] {
            assert!(!context.contains(label), "unexpected label {label}");
        }
    }

    #[test]
    fn full_request_renders_every_field_once_in_order() {
        let request = full_request();
        let duration = compute_duration("14:00", "17:00").unwrap();
        let context = render_party_context(&request, Some(&duration));
        let lines: Vec<&str> = context.lines().collect();

        let expected = [
            "Occasion: birthday",
            "Planning focus: food",
            "Guest count: 8",
            "Location: indoor",
            "Party time: 14:00 to 17:00",
            "Duration: 3 hours, time of day: afternoon",
            "Time of day: afternoon",
            "Dietary restrictions: no nuts",
            "Guest ages: kids",
            "Special requests: dinosaur theme",
        ];
        assert_eq!(lines.len(), expected.len() + 1);
        for (line, want) in lines.iter().zip(expected.iter()) {
            assert_eq!(line, want);
        }
        assert!(lines.last().unwrap().contains("focusing on: food"));
    }

    #[test]
    fn time_line_requires_both_ends() {
        let mut request = PartyRequest::minimal("bbq", "drinks");
        request.start_time = Some("14:00".to_string());
        let context = render_party_context(&request, None);
        assert!(!context.contains("Party time:"));
    }

    #[test]
    fn duration_omitted_when_unavailable() {
        let mut request = PartyRequest::minimal("bbq", "drinks");
        request.start_time = Some("2pm".to_string());
        request.end_time = Some("5pm".to_string());
        let context = render_party_context(&request, None);
        assert!(context.contains("Party time: 2pm to 5pm"));
        assert!(!context.contains("Duration:"));
    }
}
