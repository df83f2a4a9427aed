//! Loose value coercions used by the sanitize path
//!
//! Incoming JSON is converted to the declared field type without failing:
//! every input maps to some value of the target type.

use serde_json::Value;

/// Truthiness of an arbitrary JSON value.
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]` and `{}` are false.
pub fn to_bool(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !(s.is_empty() || s == "0"),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

/// Numeric cast of an arbitrary JSON value.
///
/// Floats truncate toward zero and saturate at the `i64` range. Strings use
/// their leading numeric prefix, so `"12abc"` is 12 and `"abc"` is 0.
pub fn to_int(value: &Value) -> i64 {
	match value {
		Value::Null => 0,
		Value::Bool(b) => i64::from(*b),
		Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().map_or(0, truncate)),
		Value::String(s) => parse_int_prefix(s),
		Value::Array(a) => i64::from(!a.is_empty()),
		Value::Object(o) => i64::from(!o.is_empty()),
	}
}

/// Plain-text form of an arbitrary JSON value.
///
/// Markup is stripped, percent-encoded octets removed, whitespace collapsed
/// and the result trimmed. Arrays and objects become the empty string.
pub fn to_text(value: &Value) -> String {
	match value {
		Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
		Value::Bool(true) => "1".into(),
		Value::Bool(false) => String::new(),
		Value::Number(n) => n.to_string(),
		Value::String(s) => sanitize_text(s),
	}
}

fn truncate(f: f64) -> i64 {
	// `as` saturates and maps NaN to 0
	f.trunc() as i64
}

fn parse_int_prefix(s: &str) -> i64 {
	let s = s.trim_start();
	let bytes = s.as_bytes();
	let mut end = 0;
	let mut is_float = false;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		end += 1;
	}
	let digits_start = end;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
	}
	let mut has_digits = end > digits_start;
	if end < bytes.len() && bytes[end] == b'.' {
		let frac_start = end + 1;
		let mut frac_end = frac_start;
		while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
			frac_end += 1;
		}
		if has_digits || frac_end > frac_start {
			has_digits = true;
			is_float = true;
			end = frac_end;
		}
	}
	if !has_digits {
		return 0;
	}
	if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
		let mut exp_end = end + 1;
		if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
			exp_end += 1;
		}
		let exp_digits = exp_end;
		while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
			exp_end += 1;
		}
		if exp_end > exp_digits {
			is_float = true;
			end = exp_end;
		}
	}

	let prefix = &s[..end];
	if !is_float {
		if let Ok(i) = prefix.parse::<i64>() {
			return i;
		}
	}
	prefix.parse::<f64>().map_or(0, truncate)
}

/// Strip markup and normalize whitespace in a user-supplied string
///
/// Only `\r`, `\n`, `\t` and space are collapsed; other whitespace such as
/// NBSP is kept as text.
pub fn sanitize_text(input: &str) -> String {
	let stripped = strip_octets(&strip_tags(input));
	stripped.split(['\r', '\n', '\t', ' ']).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

/// A `<` opens a tag only when followed by a letter, `/`, `!` or `?`
fn opens_tag(tail: &str) -> bool {
	tail[1..].chars().next().is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Remove all tags; `<script>` and `<style>` lose their content as well.
/// A `<` that does not open a tag, or opens one that is never closed, is kept.
fn strip_tags(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut rest = input;

	while let Some(lt) = rest.find('<') {
		out.push_str(&rest[..lt]);
		let tail = &rest[lt..];
		if !opens_tag(tail) {
			out.push('<');
			rest = &tail[1..];
			continue;
		}
		let Some(gt) = tail.find('>') else {
			// No `>` anywhere after this point, so nothing left is markup
			out.push_str(tail);
			return out;
		};
		let tag = tail[1..gt].to_ascii_lowercase();
		rest = &tail[gt + 1..];

		for block in ["script", "style"] {
			if tag.starts_with(block)
				&& tag[block.len()..].chars().next().is_none_or(|c| c.is_whitespace() || c == '/')
			{
				rest = skip_past_close(rest, block);
				break;
			}
		}
	}
	out.push_str(rest);
	out
}

/// Skip to just after `</block ...>`, or to the end if the block is never closed
fn skip_past_close<'a>(rest: &'a str, block: &str) -> &'a str {
	let close = format!("</{}", block);
	let pos = rest
		.as_bytes()
		.windows(close.len())
		.position(|w| w.eq_ignore_ascii_case(close.as_bytes()));
	match pos {
		Some(pos) => rest[pos..].find('>').map_or("", |end| &rest[pos + end + 1..]),
		None => "",
	}
}

/// Remove percent-encoded octets such as `%3C`.
///
/// Removal is repeated until none are left, so `%%41` becomes `%`.
fn strip_octets(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		out.push(c);
		let b = out.as_bytes();
		let n = b.len();
		if n >= 3 && b[n - 3] == b'%' && b[n - 2].is_ascii_hexdigit() && b[n - 1].is_ascii_hexdigit()
		{
			out.truncate(n - 3);
		}
	}
	out
}


// vim: ts=4
