use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetLabelEntry {
    pub filename: String,
    pub pet_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResult {
    pub filename: String,
    pub pet_label: String,
    pub classifier_label: String,
    pub is_match: bool,
    pub pet_is_dog: bool,
    pub classifier_is_dog: bool,
}

impl ImageResult {
    pub fn new(
        filename: String,
        pet_label: String,
        classifier_label: String,
        is_match: bool,
    ) -> Self {
        Self {
            filename,
            pet_label,
            classifier_label,
            is_match,
            pet_is_dog: false,
            classifier_is_dog: false,
        }
    }

    pub fn dog_votes(&self) -> u8 {
        u8::from(self.pet_is_dog) + u8::from(self.classifier_is_dog)
    }

    pub fn is_correct_breed(&self) -> bool {
        self.is_match && self.pet_is_dog && self.classifier_is_dog
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Count(usize),
    Percent(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsStats {
    pub n_images: usize,
    pub n_dogs_img: usize,
    pub n_notdogs_img: usize,
    pub n_match: usize,
    pub n_correct_dogs: usize,
    pub n_correct_notdogs: usize,
    pub n_correct_breed: usize,
    pub pct_match: f64,
    pub pct_correct_dogs: f64,
    pub pct_correct_breed: f64,
    pub pct_correct_notdogs: f64,
}

impl ResultsStats {
    pub fn entries(&self) -> [(&'static str, StatValue); 11] {
        [
            ("n_dogs_img", StatValue::Count(self.n_dogs_img)),
            ("n_match", StatValue::Count(self.n_match)),
            ("n_correct_dogs", StatValue::Count(self.n_correct_dogs)),
            ("n_correct_notdogs", StatValue::Count(self.n_correct_notdogs)),
            ("n_correct_breed", StatValue::Count(self.n_correct_breed)),
            ("n_images", StatValue::Count(self.n_images)),
            ("n_notdogs_img", StatValue::Count(self.n_notdogs_img)),
            ("pct_match", StatValue::Percent(self.pct_match)),
            ("pct_correct_dogs", StatValue::Percent(self.pct_correct_dogs)),
            ("pct_correct_breed", StatValue::Percent(self.pct_correct_breed)),
            ("pct_correct_notdogs", StatValue::Percent(self.pct_correct_notdogs)),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierLabelManifest {
    pub manifest_version: u32,
    pub models: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub report_version: u32,
    pub generated_at: String,
    pub arch: String,
    pub image_dir: String,
    pub dogfile: String,
    pub dogfile_sha256: String,
    pub runtime_seconds: f64,
    pub stats: ResultsStats,
    pub results: Vec<ImageResult>,
}
