// Field rules shared by project creation and update.

pub const MAX_NAME_CHARS: usize = 200;

pub fn normalized_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    let chars = name.chars().count();
    (1..=MAX_NAME_CHARS)
        .contains(&chars)
        .then(|| name.to_string())
}

pub fn valid_budget(budget_hours: Option<f64>) -> bool {
    budget_hours.is_none_or(|hours| hours.is_finite() && hours >= 0.0)
}
