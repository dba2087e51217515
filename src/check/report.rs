use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub print_incorrect_dogs: bool,
    pub print_incorrect_breed: bool,
}

pub fn write_summary<W: Write>(
    output: &mut W,
    results: &[ImageResult],
    stats: &ResultsStats,
    arch: Arch,
    options: ReportOptions,
) -> Result<()> {
    writeln!(
        output,
        "\n\n*** Results Summary for CNN Model Architecture {} ***",
        arch.as_str().to_uppercase()
    )?;
    writeln!(output, "{:>20}: {:>3}", "N Images", stats.n_images)?;
    writeln!(output, "{:>20}: {:>3}", "N Dog Images", stats.n_dogs_img)?;
    writeln!(output, "{:>20}: {:>3}", "N Not-Dog Images", stats.n_notdogs_img)?;
    writeln!(output)?;

    for (name, value) in stats.entries() {
        if !name.starts_with('p') {
            continue;
        }
        if let StatValue::Percent(pct) = value {
            writeln!(output, "{name:>20}: {pct:>5.1}")?;
        }
    }

    if options.print_incorrect_dogs
        && stats.n_correct_dogs + stats.n_correct_notdogs != stats.n_images
    {
        writeln!(output, "\nINCORRECT Dog/NOT Dog Assignments:")?;
        for result in incorrect_dog_assignments(results) {
            write_misclassified(output, result)?;
        }
    }

    if options.print_incorrect_breed && stats.n_correct_dogs != stats.n_correct_breed {
        writeln!(output, "\nINCORRECT Dog Breed Assignment:")?;
        for result in incorrect_breed_assignments(results) {
            write_misclassified(output, result)?;
        }
    }

    Ok(())
}

pub fn incorrect_dog_assignments(results: &[ImageResult]) -> impl Iterator<Item = &ImageResult> {
    results.iter().filter(|result| result.dog_votes() == 1)
}

pub fn incorrect_breed_assignments(results: &[ImageResult]) -> impl Iterator<Item = &ImageResult> {
    results
        .iter()
        .filter(|result| result.dog_votes() == 2 && !result.is_match)
}

fn write_misclassified<W: Write>(output: &mut W, result: &ImageResult) -> Result<()> {
    writeln!(
        output,
        "Real: {:<26}   Classifier: {:<30}",
        result.pet_label, result.classifier_label
    )?;
    Ok(())
}

pub fn write_runtime<W: Write>(output: &mut W, runtime_seconds: f64) -> Result<()> {
    writeln!(output, "\nTotal Runtime: {runtime_seconds:.3} seconds")?;
    Ok(())
}
