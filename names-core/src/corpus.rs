//! Seed name lists.
//!
//! Each archetype has a small hand-picked sample that the transition model
//! learns from. The lists are read-only and only consulted through
//! [`Corpus`] values built by the archetype catalog.

use serde::{Deserialize, Serialize};

pub const ARISTOCRAT: &[&str] = &[
	"Alaric", "Selene", "Vorian", "Isolde", "Cadris", "Elaryn", "Tavros", "Velena", "Sorin",
	"Amara", "Vaelorn", "Seraphis", "Althira", "Vantrel", "Elowen", "Lucaryn", "Amrion", "Selvane",
	"Marquent", "Cyradyl", "Vaelith", "Aeloria", "Thalric", "Selvyn", "Caldrin", "Liraeth",
	"Orvane", "Eryndor", "Mylaren", "Vorwyn", "Sylvara", "Elyndra", "Cassivar", "Tavryn",
	"Zoralen", "Kysera", "Velmira", "Altheon", "Seranth", "Lorvyn", "Caelyth", "Vandros",
	"Nyvaren", "Solvyn", "Averis", "Talvorn", "Elvyth", "Ravelle", "Sorewyn",
];

pub const MERCENARY: &[&str] = &[
	"Brak", "Tov", "Jax", "Korr", "Vren", "Daxin", "Ryka", "Morn", "Drav", "Zek", "Ryn", "Vex",
	"Tyro", "Zane", "Brix", "Doss", "Kade", "Nyla", "Vorn", "Skarn", "Raxx", "Brek", "Tarn", "Vosk",
	"Dren", "Zev", "Kriv", "Lorn", "Syrn", "Karn", "Mek", "Trov", "Briv", "Dax", "Zorn", "Nesk",
	"Krel", "Brynn", "Sax", "Trix", "Vorn", "Grek", "Drox", "Zarn", "Riv", "Threx", "Bryn", "Vor",
	"Mesk",
];

pub const PILOT: &[&str] = &[
	"Kira", "Tarin", "Zade", "Vessa", "Orin", "Sela", "Drex", "Lyra", "Kairos", "Mira", "Cassian",
	"Kylo", "Skye", "Jett", "Nox", "Vira", "Dash", "Lira", "Kato", "Raze", "Tana", "Axil", "Navi",
	"Sorn", "Vexa", "Daren", "Tyra", "Calo", "Xela", "Vonn", "Zera", "Kael", "Torin", "Nyra",
	"Bryn", "Zyra", "Vorn", "Lysa", "Drex", "Jora", "Talon", "Vrix", "Nysa", "Sava", "Pyra", "Rix",
	"Zayl", "Myra", "Tove",
];

pub const STAR_KNIGHT: &[&str] = &[
	"Daelen", "Veyra", "Khalon", "Seris", "Talora", "Jorvan", "Mythra", "Keren", "Vaelen",
	"Soraya", "Zaryn", "Thalyra", "Kaelen", "Solveth", "Myralis", "Velorin", "Avaris", "Torwyn",
	"Kyrelis", "Lorvath", "Sylven", "Auren", "Celyra", "Elyndor", "Tharion", "Lysera", "Ravon",
	"Soryn", "Azrin", "Vareth", "Xyrel", "Miren", "Thyron", "Khalen", "Syrith", "Avaron", "Vyrel",
	"Torven", "Calryn", "Velric", "Olyndra", "Zevryn", "Tirath", "Sarion", "Myrric", "Thalven",
	"Solryn", "Kylarin", "Aerith",
];

pub const ALIEN_BRUTE: &[&str] = &[
	"Gornak", "Vurth", "Brakka", "Zurr", "Thrak", "Drolg", "Krusk", "Mavok", "Vorlag", "Durth",
	"Groth", "Vrekk", "Brorg", "Thorg", "Zarn", "Krogg", "Vornak", "Druzz", "Grakk", "Murn",
	"Krivg", "Brog", "Darg", "Vorrg", "Skarv", "Thregg", "Murog", "Grath", "Vorgr", "Thrunn",
	"Brund", "Durng", "Zogr", "Kroth", "Mavrug", "Vrog", "Gurn", "Drath", "Bruk", "Throg", "Vragg",
	"Grorn", "Zarg", "Drog", "Vorak", "Krurg", "Brov", "Drav", "Torg",
];

pub const ALIEN_MYSTIC: &[&str] = &[
	"Xilra", "Sural", "Vethryn", "Nyssa", "Zylla", "Quorra", "Ythra", "Luvren", "Syrran", "Veloth",
	"Zhora", "Kyvra", "Sylak", "Thyra", "Veydra", "Ryvola", "Azveth", "Soryn", "Xylen", "Vireth",
	"Myzra", "Orlyn", "Velra", "Kyreth", "Sylora", "Thylen", "Zivra", "Qirith", "Velyn", "Tavora",
	"Rinath", "Sorvyn", "Azira", "Zhoren", "Vesryn", "Lyxra", "Xaroth", "Myrel", "Tirven", "Voryn",
	"Zyrel", "Syrith", "Qylla", "Vysra", "Orvyn", "Sylaeth", "Xavren", "Velneth", "Zyrak",
];

/// Generic family names shared by every non-mechanical archetype.
pub const SURNAMES: &[&str] = &[
	"Varn", "Kessler", "Draven", "Solari", "Maddox", "Torvane", "Halcyon", "Rourke", "Vance",
	"Castellan", "Thorne", "Okafor", "Marrow", "Strand", "Kovac", "Ashby", "Renner", "Calloway",
	"Dresden", "Voss", "Harrow", "Quill", "Lindqvist", "Saradin", "Mercer", "Oduya", "Falk",
	"Brennan", "Talvik", "Corvel", "Radek", "Winslow", "Haldane", "Ortega", "Sato", "Everhart",
	"Blackwood", "Tessaro", "Kincaid", "Moravec", "Ironside", "Valen", "Crowder", "Nakamura",
	"Petrov", "Sutter", "Rask", "Delacroix", "Okonkwo", "Hale",
];

/// An ordered, immutable list of seed names for one archetype.
///
/// # Invariants
/// - No entry is empty or contains whitespace
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
	names: Vec<String>,
}

impl Corpus {
	/// Builds a corpus from a static list.
	pub fn from_static(names: &[&str]) -> Self {
		Self::from_names(names.iter().copied())
	}

	/// Builds a corpus from arbitrary names.
	///
	/// Whitespace is removed from each entry and empty entries are dropped.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names = names
			.into_iter()
			.map(|name| name.as_ref().chars().filter(|c| !c.is_whitespace()).collect::<String>())
			.filter(|name| !name.is_empty())
			.collect();
		Self { names }
	}

	/// Builds a corpus from the lines of a text file.
	///
	/// Blank lines and lines starting with `#` are skipped.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let kept: Vec<String> = lines
			.into_iter()
			.map(|line| line.as_ref().trim().to_owned())
			.filter(|line| !line.is_empty() && !line.starts_with('#'))
			.collect();
		Self::from_names(kept)
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}
