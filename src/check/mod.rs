use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::cli::{Arch, Cli};
use crate::model::{
    ClassifierLabelManifest, ImageResult, PetLabelEntry, ResultsStats, RunReport, StatValue,
};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

const REPORT_VERSION: u32 = 1;
const LABEL_MANIFEST_VERSION: u32 = 1;

mod annotate;
mod classifier;
mod dognames;
mod matcher;
mod pet_labels;
mod report;
mod run;
mod stats;

pub use run::run;

use annotate::*;
use classifier::*;
use dognames::*;
use matcher::*;
use pet_labels::*;
use report::*;
use run::*;
use stats::*;
