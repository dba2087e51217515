use super::*;

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub results: Vec<ImageResult>,
    pub stats: ResultsStats,
}

pub fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    info!(
        dir = %cli.dir.display(),
        arch = cli.arch.as_str(),
        dogfile = %cli.dogfile.display(),
        "starting check"
    );

    let classifier = build_classifier(&cli)?;
    let evaluation = evaluate(
        &cli.dir,
        &cli.dogfile,
        cli.arch,
        cli.strip_extension,
        classifier.as_ref(),
    )?;

    let options = ReportOptions {
        print_incorrect_dogs: cli.print_incorrect_dogs,
        print_incorrect_breed: cli.print_incorrect_breed,
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_summary(
        &mut output,
        &evaluation.results,
        &evaluation.stats,
        cli.arch,
        options,
    )?;
    let runtime_seconds = started.elapsed().as_secs_f64();
    write_runtime(&mut output, runtime_seconds)?;
    output.flush()?;

    if let Some(report_path) = &cli.json_report {
        let report = RunReport {
            report_version: REPORT_VERSION,
            generated_at: now_utc_string(),
            arch: cli.arch.as_str().to_string(),
            image_dir: cli.dir.display().to_string(),
            dogfile: cli.dogfile.display().to_string(),
            dogfile_sha256: sha256_file(&cli.dogfile)?,
            runtime_seconds,
            stats: evaluation.stats,
            results: evaluation.results,
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote json report");
    }

    info!(runtime_seconds, "check completed");
    Ok(())
}

pub fn evaluate(
    image_dir: &Path,
    dogfile: &Path,
    arch: Arch,
    strip_extension: bool,
    classifier: &dyn ImageClassifier,
) -> Result<Evaluation> {
    let filenames = list_image_filenames(image_dir)?;
    let pet_labels = extract_pet_labels(&filenames, strip_extension);
    info!(images = pet_labels.len(), dir = %image_dir.display(), "extracted pet labels");

    let mut results = classify_images(image_dir, &pet_labels, arch, classifier)?;
    info!(
        images = results.len(),
        matches = results.iter().filter(|result| result.is_match).count(),
        "classification finished"
    );

    let dog_names = DogNames::load(dogfile)?;
    info!(dog_names = dog_names.len(), path = %dogfile.display(), "loaded dog names");

    annotate_dogs(&mut results, &dog_names);
    let stats = calculate_results_stats(&results);

    Ok(Evaluation { results, stats })
}

pub fn classify_images(
    image_dir: &Path,
    pet_labels: &[PetLabelEntry],
    arch: Arch,
    classifier: &dyn ImageClassifier,
) -> Result<Vec<ImageResult>> {
    let mut results = Vec::with_capacity(pet_labels.len());

    for entry in pet_labels {
        let image_path = image_dir.join(&entry.filename);
        let output = classify_image(classifier, &image_path, arch)
            .with_context(|| format!("failed to classify {}", image_path.display()))?;
        let tier = match_tier(&entry.pet_label, &output);

        debug!(
            filename = %entry.filename,
            pet_label = %entry.pet_label,
            classifier_label = output.label(),
            tier = ?tier,
            "classified image"
        );

        results.push(ImageResult::new(
            entry.filename.clone(),
            entry.pet_label.clone(),
            output.into_label(),
            tier.is_some(),
        ));
    }

    Ok(results)
}
