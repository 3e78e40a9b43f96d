// File: src/model/parser.rs
use crate::model::ParsedDate;
use chrono::NaiveDate;

/// Parses a free-text Dutch date expression into day/month/(year).
///
/// Accepted forms, tried in order:
/// 1. numeric `D-M-Y`, `D-M`, `D/M/Y`, `D/M` (and ISO `Y-M-D`)
/// 2. month names: `D <maand> Y` or `D <maand>`, optionally preceded by a weekday
///
/// Parenthetical text is dropped before matching. Anything else yields None;
/// callers skip such rows.
pub fn parse_date_expression(input: &str) -> Option<ParsedDate> {
    let clean = normalize(&strip_parentheticals(input));
    if clean.is_empty() {
        return None;
    }
    parse_numeric(&clean).or_else(|| parse_month_name(&clean))
}

/// Splits `main (alt)` into its two halves. The alternate is None when there is
/// no parenthetical or it is empty.
pub fn split_parenthetical(input: &str) -> (String, Option<String>) {
    match (input.find('('), input.rfind(')')) {
        (Some(open), Some(close)) if close > open => {
            let main = format!("{} {}", &input[..open], &input[close + 1..]);
            let alt = input[open + 1..close].trim();
            let alt = if alt.is_empty() {
                None
            } else {
                Some(alt.to_string())
            };
            (main.trim().to_string(), alt)
        }
        _ => (input.trim().to_string(), None),
    }
}

fn strip_parentheticals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut depth = 0usize;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Lowercases, folds diacritics and collapses whitespace.
fn normalize(input: &str) -> String {
    let folded: String = input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            _ => c,
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_numeric(s: &str) -> Option<ParsedDate> {
    let sep = if s.contains('-') {
        '-'
    } else if s.contains('/') {
        '/'
    } else {
        return None;
    };
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    match parts.as_slice() {
        // ISO: 2025-05-04
        [y, m, d] if y.len() == 4 => {
            build(d.parse().ok()?, m.parse().ok()?, Some(parse_year(y)?))
        }
        [d, m, y] => build(d.parse().ok()?, m.parse().ok()?, Some(parse_year(y)?)),
        [d, m] => build(d.parse().ok()?, m.parse().ok()?, None),
        _ => None,
    }
}

fn parse_month_name(s: &str) -> Option<ParsedDate> {
    let mut tokens: Vec<&str> = s
        .split(' ')
        .map(|t| t.trim_matches(|c: char| c == ',' || c == '.'))
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.first().is_some_and(|t| is_weekday_name(t)) {
        tokens.remove(0);
    }

    match tokens.as_slice() {
        [day, month] => build(day.parse().ok()?, month_number(month)?, None),
        [day, month, year] => build(
            day.parse().ok()?,
            month_number(month)?,
            Some(parse_year(year)?),
        ),
        _ => None,
    }
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 {
        return None;
    }
    s.parse().ok()
}

fn build(day: u32, month: u32, year: Option<i32>) -> Option<ParsedDate> {
    // 2000 is a leap year, so 29-02 survives without an explicit year.
    NaiveDate::from_ymd_opt(year.unwrap_or(2000), month, day)?;
    Some(ParsedDate { day, month, year })
}

/// Maps a (normalized) Dutch month name to 1-12.
pub fn month_number(name: &str) -> Option<u32> {
    let n = match name {
        "januari" => 1,
        "februari" => 2,
        "maart" => 3,
        "april" => 4,
        "mei" => 5,
        "juni" => 6,
        "juli" => 7,
        "augustus" => 8,
        "september" => 9,
        "oktober" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(n)
}

fn is_weekday_name(s: &str) -> bool {
    matches!(
        s,
        "maandag" | "dinsdag" | "woensdag" | "donderdag" | "vrijdag" | "zaterdag" | "zondag"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parenthetical() {
        let (main, alt) = split_parenthetical("4 mei (3 mei)");
        assert_eq!(main, "4 mei");
        assert_eq!(alt.as_deref(), Some("3 mei"));

        let (main, alt) = split_parenthetical("  27 april ");
        assert_eq!(main, "27 april");
        assert!(alt.is_none());

        let (_, alt) = split_parenthetical("4 mei ()");
        assert!(alt.is_none());
    }

    #[test]
    fn test_normalize_folds_diacritics() {
        assert_eq!(normalize("  Máárt   2025 "), "maart 2025");
    }

    #[test]
    fn test_leap_day_without_year_is_kept() {
        let p = parse_date_expression("29-02").unwrap();
        assert_eq!((p.day, p.month, p.year), (29, 2, None));
        assert!(parse_date_expression("29-02-2025").is_none());
    }
}
