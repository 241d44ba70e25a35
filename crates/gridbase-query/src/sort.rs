//! Multi-key stable row comparison

use std::cmp::Ordering;

use gridbase_core::{Row, Sort, SortDirection, Value};

/// Compare two cell values for ordering
///
/// The order is stratified so it stays total: values that coerce to a
/// finite number form one class and compare numerically; everything else
/// falls back to a natural string comparison so that "10" sorts after
/// "9". Numeric values order before non-numeric ones. Mixing the two
/// paths per-pair would let cycles form (numerically `"-5" < "-3"`, but
/// as strings `"-3" < "-4x" < "-5"`), and `sort_by` may panic on a
/// cyclic comparator.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        // Finite by construction, so partial_cmp cannot fail
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => natural_cmp(&a.to_display_string(), &b.to_display_string()),
    }
}

/// Case-insensitive, digit-run-aware string ordering
///
/// Runs of ASCII digits compare by numeric value (shorter stripped run =
/// smaller), other characters by lowercase code point. Ties fall back to a
/// plain lowercase comparison, then to the raw strings, so the ordering is
/// total.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let av: Vec<char> = a.chars().collect();
    let bv: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < av.len() && j < bv.len() {
        if av[i].is_ascii_digit() && bv[j].is_ascii_digit() {
            let run_a = digit_run(&av, &mut i);
            let run_b = digit_run(&bv, &mut j);
            match compare_digit_runs(run_a, run_b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        let ca = av[i].to_lowercase().next().unwrap_or(av[i]);
        let cb = bv[j].to_lowercase().next().unwrap_or(bv[j]);
        match ca.cmp(&cb) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            other => return other,
        }
    }

    match (av.len() - i).cmp(&(bv.len() - j)) {
        Ordering::Equal => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
        other => other,
    }
}

fn digit_run<'a>(chars: &'a [char], pos: &mut usize) -> &'a [char] {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    &chars[start..*pos]
}

fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    // Longer run of significant digits = larger number
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &[char]) -> &[char] {
    let first = digits.iter().position(|c| *c != '0').unwrap_or(digits.len());
    &digits[first..]
}

/// Compare two rows under a multi-key sort spec
///
/// Keys are tried in list order; the first key that differs decides, negated
/// for descending keys. All-equal keys return `Equal`, which keeps the
/// original relative order under a stable sort.
pub fn compare_rows(a: &Row, b: &Row, sorts: &[Sort]) -> Ordering {
    for sort in sorts {
        let ordering = compare_values(a.get(&sort.field), b.get(&sort.field));
        if ordering != Ordering::Equal {
            return match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
        }
    }
    Ordering::Equal
}

/// Stable multi-key sort of a row list
pub fn sort_rows(rows: &mut [Row], sorts: &[Sort]) {
    if sorts.is_empty() {
        return;
    }
    rows.sort_by(|a, b| compare_rows(a, b, sorts));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_numeric_before_lexicographic() {
        assert_eq!(
            compare_values(&Value::text("9"), &Value::text("10")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::text("29.99"), &Value::Number(5.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_natural_string_ordering() {
        // "item10" after "item9", despite lexicographic order
        assert_eq!(
            compare_values(&Value::text("item9"), &Value::text("item10")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::text("item2a"), &Value::text("item2b")),
            Ordering::Less
        );
        // Case-insensitive
        assert_eq!(
            compare_values(&Value::text("apple"), &Value::text("Banana")),
            Ordering::Less
        );
    }

    #[test]
    fn test_missing_values_sort_as_empty() {
        let a = Row::new("r1");
        let b = Row::new("r2").with("c1", "x");
        let sorts = [Sort::asc("c1")];
        assert_eq!(compare_rows(&a, &b, &sorts), Ordering::Less);
    }

    #[test]
    fn test_single_key_desc() {
        let mut rows = vec![
            Row::new("r1").with("c2", "5"),
            Row::new("r2").with("c2", "10"),
            Row::new("r3").with("c2", "1"),
        ];
        sort_rows(&mut rows, &[Sort::desc("c2")]);
        assert_eq!(ids(&rows), ["r2", "r1", "r3"]);
    }

    #[test]
    fn test_multi_key_tie_break() {
        // Equal primary key, secondary descending decides
        let mut rows = vec![
            Row::new("r1").with("a", "x").with("b", "1"),
            Row::new("r2").with("a", "x").with("b", "3"),
            Row::new("r3").with("a", "x").with("b", "2"),
        ];
        sort_rows(&mut rows, &[Sort::asc("a"), Sort::desc("b")]);
        assert_eq!(ids(&rows), ["r2", "r3", "r1"]);
    }

    #[test]
    fn test_stability_on_full_tie() {
        let mut rows = vec![
            Row::new("r1").with("a", "x"),
            Row::new("r2").with("a", "x"),
            Row::new("r3").with("a", "x"),
        ];
        sort_rows(&mut rows, &[Sort::asc("a")]);
        assert_eq!(ids(&rows), ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_empty_sort_spec_is_noop() {
        let mut rows = vec![Row::new("r2").with("a", "b"), Row::new("r1").with("a", "a")];
        sort_rows(&mut rows, &[]);
        assert_eq!(ids(&rows), ["r2", "r1"]);
    }

    #[test]
    fn test_dangling_sort_field_degrades() {
        // Every value reads empty, so the order is unchanged
        let mut rows = vec![Row::new("r2").with("a", "b"), Row::new("r1").with("a", "a")];
        sort_rows(&mut rows, &[Sort::asc("zzz")]);
        assert_eq!(ids(&rows), ["r2", "r1"]);
    }

    #[test]
    fn test_mixed_numeric_and_text_is_total() {
        // Negative numbers mixed with unparseable text must not form a
        // cycle: parseable values compare numerically and order before
        // the non-parseable class
        let five = Value::text("-5");
        let three = Value::text("-3");
        let garbled = Value::text("-4x");
        assert_eq!(compare_values(&five, &three), Ordering::Less);
        assert_eq!(compare_values(&five, &garbled), Ordering::Less);
        assert_eq!(compare_values(&three, &garbled), Ordering::Less);
        assert_eq!(compare_values(&garbled, &five), Ordering::Greater);

        let mut rows = vec![
            Row::new("r1").with("a", "-4x"),
            Row::new("r2").with("a", "-3"),
            Row::new("r3").with("a", "-5"),
        ];
        sort_rows(&mut rows, &[Sort::asc("a")]);
        assert_eq!(ids(&rows), ["r3", "r2", "r1"]);
    }

    #[test]
    fn test_leading_zeros_compare_numerically() {
        assert_eq!(
            compare_values(&Value::text("a007"), &Value::text("a8")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::text("a010"), &Value::text("a9")),
            Ordering::Greater
        );
    }
}
