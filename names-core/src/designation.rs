//! Robot-style alphanumeric designations.
//!
//! Not statistical: a template is picked uniformly and each placeholder is
//! filled independently.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Letter placeholder.
pub const LETTER: char = 'X';

/// Digit placeholder.
pub const DIGIT: char = 'N';

/// Template catalog. Every `X` becomes `A-Z` and every `N` becomes `0-9`,
/// wherever they appear (`SYN-N` gives `SY4-7`); anything else is copied
/// verbatim.
pub const TEMPLATES: &[&str] = &[
	"XX-N", "XN-N", "XXX-N", "X-NN", "XX-NN", "XN-NN", "X-NNN", "VX-N", "TX-NN", "RX-N", "PX-N",
	"MK-N", "SYN-N", "ZED-N",
];

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates one designation with the thread RNG.
pub fn generate_code() -> String {
	generate_code_with(&mut rand::rng())
}

/// Generates one designation from a random template.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
	// TEMPLATES is a non-empty constant
	let template = TEMPLATES.choose(rng).copied().unwrap_or("XX-N");
	fill_template(template, rng)
}

/// Instantiates `template`, replacing each placeholder.
pub fn fill_template<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
	template
		.chars()
		.map(|c| match c {
			LETTER => LETTERS[rng.random_range(0..LETTERS.len())] as char,
			DIGIT => char::from(b'0' + rng.random_range(0..10u8)),
			other => other,
		})
		.collect()
}

/// Checks that `code` has the shape of `template`.
pub fn matches_template(code: &str, template: &str) -> bool {
	code.chars().count() == template.chars().count()
		&& code.chars().zip(template.chars()).all(|(c, t)| match t {
			LETTER => c.is_ascii_uppercase(),
			DIGIT => c.is_ascii_digit(),
			literal => c == literal,
		})
}

/// Returns `true` if `code` matches any template of the catalog.
pub fn is_designation(code: &str) -> bool {
	TEMPLATES.iter().any(|template| matches_template(code, template))
}
