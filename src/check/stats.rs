use super::*;

pub fn calculate_results_stats(results: &[ImageResult]) -> ResultsStats {
    let mut stats = ResultsStats {
        n_images: results.len(),
        ..ResultsStats::default()
    };

    for result in results {
        if result.is_match {
            stats.n_match += 1;
        }
        if result.is_correct_breed() {
            stats.n_correct_breed += 1;
        }

        if result.pet_is_dog {
            stats.n_dogs_img += 1;
            if result.classifier_is_dog {
                stats.n_correct_dogs += 1;
            }
        } else if !result.classifier_is_dog {
            stats.n_correct_notdogs += 1;
        }
    }

    stats.n_notdogs_img = stats.n_images - stats.n_dogs_img;

    stats.pct_match = percentage(stats.n_match, stats.n_images);
    stats.pct_correct_dogs = percentage(stats.n_correct_dogs, stats.n_dogs_img);
    stats.pct_correct_breed = percentage(stats.n_correct_breed, stats.n_dogs_img);
    stats.pct_correct_notdogs = percentage(stats.n_correct_notdogs, stats.n_notdogs_img);

    stats
}

pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
