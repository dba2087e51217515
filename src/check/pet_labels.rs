use super::*;

pub fn list_image_filenames(image_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(image_dir)
        .with_context(|| format!("failed to read image directory {}", image_dir.display()))?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", image_dir.display()))?;
        let Ok(filename) = entry.file_name().into_string() else {
            bail!("invalid UTF-8 filename: {}", entry.path().display());
        };
        filenames.push(filename);
    }

    filenames.sort();
    Ok(filenames)
}

/// Without `strip_extension` a word glued to the extension is lost:
/// `great_pyrenees.jpg` gives `"great"`.
pub fn pet_label_from_filename(filename: &str, strip_extension: bool) -> String {
    let source = if strip_extension {
        Path::new(filename)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(filename)
    } else {
        filename
    };

    source
        .to_lowercase()
        .split('_')
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn extract_pet_labels<I, S>(filenames: I, strip_extension: bool) -> Vec<PetLabelEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut labels = Vec::new();

    for filename in filenames {
        let filename = filename.as_ref();
        if !seen.insert(filename.to_string()) {
            continue;
        }

        let pet_label = pet_label_from_filename(filename, strip_extension);
        if pet_label.is_empty() {
            debug!(filename, "filename has no alphabetic label tokens");
        }

        labels.push(PetLabelEntry {
            filename: filename.to_string(),
            pet_label,
        });
    }

    labels
}
