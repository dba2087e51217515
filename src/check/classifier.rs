use super::*;

pub trait ImageClassifier {
    fn classify(&self, image_path: &Path, arch: Arch) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOutput {
    label: String,
}

impl ClassifierOutput {
    pub fn normalize(raw: &str) -> Self {
        Self {
            label: raw.to_lowercase().trim().to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn into_label(self) -> String {
        self.label
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.label.split(", ")
    }
}

pub fn classify_image(
    classifier: &dyn ImageClassifier,
    image_path: &Path,
    arch: Arch,
) -> Result<ClassifierOutput> {
    let raw = classifier.classify(image_path, arch)?;
    Ok(ClassifierOutput::normalize(&raw))
}

#[derive(Debug, Clone)]
pub struct LabelManifestClassifier {
    manifest: ClassifierLabelManifest,
}

impl LabelManifestClassifier {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("failed to read classifier labels {}", path.display()))?;
        let manifest: ClassifierLabelManifest = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse classifier labels {}", path.display()))?;
        Self::new(manifest)
    }

    pub fn new(manifest: ClassifierLabelManifest) -> Result<Self> {
        if manifest.manifest_version != LABEL_MANIFEST_VERSION {
            bail!(
                "unsupported classifier label manifest version {} (expected {})",
                manifest.manifest_version,
                LABEL_MANIFEST_VERSION
            );
        }
        Ok(Self { manifest })
    }
}

impl ImageClassifier for LabelManifestClassifier {
    fn classify(&self, image_path: &Path, arch: Arch) -> Result<String> {
        let filename = image_path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("invalid image path: {}", image_path.display()))?;

        let labels = self
            .manifest
            .models
            .get(arch.as_str())
            .with_context(|| format!("no classifier labels recorded for arch {}", arch.as_str()))?;

        labels.get(filename).cloned().with_context(|| {
            format!(
                "no {} classifier label recorded for {}",
                arch.as_str(),
                image_path.display()
            )
        })
    }
}

#[derive(Debug, Clone)]
pub struct CommandClassifier {
    program: PathBuf,
}

impl CommandClassifier {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl ImageClassifier for CommandClassifier {
    fn classify(&self, image_path: &Path, arch: Arch) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(image_path)
            .arg(arch.as_str())
            .output()
            .with_context(|| {
                format!(
                    "failed to execute {} for {}",
                    self.program.display(),
                    image_path.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} returned non-zero exit status for {}: {}",
                self.program.display(),
                image_path.display(),
                stderr.trim()
            );
        }

        String::from_utf8(output.stdout).with_context(|| {
            format!(
                "{} produced non-UTF-8 output for {}",
                self.program.display(),
                image_path.display()
            )
        })
    }
}

pub fn build_classifier(cli: &Cli) -> Result<Box<dyn ImageClassifier>> {
    match &cli.classifier_cmd {
        Some(program) => {
            info!(program = %program.display(), "using external classifier command");
            Ok(Box::new(CommandClassifier::new(program.clone())))
        }
        None => {
            let classifier = LabelManifestClassifier::load(&cli.labels)?;
            info!(path = %cli.labels.display(), "using classifier label manifest");
            Ok(Box::new(classifier))
        }
    }
}
