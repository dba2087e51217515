use super::*;

/// The whole classifier label is looked up, not its individual terms.
pub fn annotate_dogs(results: &mut [ImageResult], dog_names: &DogNames) {
    for result in results.iter_mut() {
        result.pet_is_dog = dog_names.contains(&result.pet_label);
        result.classifier_is_dog = dog_names.contains(&result.classifier_label);
    }
}
