use super::*;

#[derive(Debug, Clone, Default)]
pub struct DogNames {
    names: HashSet<String>,
}

impl DogNames {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open dog names file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read dog names file {}", path.display()))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut names = HashSet::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("failed to read line {line_number}"))?;
            let name = line.trim_end();

            if name.is_empty() {
                warn!(line = line_number, "skipping blank dog name line");
                continue;
            }

            if !names.insert(name.to_string()) {
                warn!(line = line_number, name, "dog name is already registered");
            }
        }

        Ok(Self { names })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.names.contains(label)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for DogNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
