use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/pilot.dat"` → `"pilot"`
/// - `"pilot.dat"` → `"pilot"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns full paths; subdirectories are ignored.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_only_matching_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.dat"), "x").unwrap();
		fs::write(dir.path().join("a.dat"), "x").unwrap();
		fs::write(dir.path().join("notes.txt"), "x").unwrap();
		fs::create_dir(dir.path().join("nested.dat")).unwrap();

		let files = list_files(dir.path(), "dat").unwrap();
		let names: Vec<String> = files.iter().map(|p| get_filename(p).unwrap()).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[test]
	fn reads_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pilot.dat");
		fs::write(&path, "Kira\r\nTarin\n").unwrap();
		assert_eq!(read_file(&path).unwrap(), vec!["Kira", "Tarin"]);
	}

	#[test]
	fn dot_folder_is_current_dir() {
		assert!(normalize_folder(Path::new(".")).is_absolute());
		assert_eq!(normalize_folder(Path::new("data")), PathBuf::from("data"));
	}
}
