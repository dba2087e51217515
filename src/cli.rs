use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pet-check",
    version,
    about = "Score a pretrained image classifier on dog vs. not-dog and dog breed"
)]
pub struct Cli {
    /// Directory of pet images; filenames carry the ground-truth label.
    #[arg(long, default_value = "pet_images/")]
    pub dir: PathBuf,

    /// CNN model architecture used for classification.
    #[arg(long, value_enum, default_value_t = Arch::Vgg)]
    pub arch: Arch,

    /// Text file with one dog label per line.
    #[arg(long, default_value = "dognames.txt")]
    pub dogfile: PathBuf,

    /// JSON manifest of precomputed classifier labels, keyed by arch and filename.
    #[arg(long, default_value = "classifier_labels.json")]
    pub labels: PathBuf,

    /// External classifier program, invoked as `<program> <image_path> <arch>`.
    #[arg(long)]
    pub classifier_cmd: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub print_incorrect_dogs: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub print_incorrect_breed: bool,

    /// Drop the file extension before extracting the pet label.
    #[arg(long, default_value_t = false)]
    pub strip_extension: bool,

    #[arg(long)]
    pub json_report: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Arch {
    Vgg,
    Alexnet,
    Resnet,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vgg => "vgg",
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
        }
    }
}
