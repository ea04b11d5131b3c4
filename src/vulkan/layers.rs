//! Instance layer availability.

use log::debug;

use super::{Backend, BootstrapError};

/// Returns the required layers that are absent from `available`, in the order they were required.
/// `required` is supported exactly when the result is empty.
///
/// Names are compared exactly: no case folding, no version matching.
pub fn missing_layers<'a, R, A>(required: &'a [R], available: &[A]) -> Vec<&'a str>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !available.iter().any(|a| a.as_ref() == *name))
        .collect()
}

/// Queries the host's instance layers and fails with [`BootstrapError::LayersUnavailable`] if any
/// of `required` is missing.
pub fn check_layer_support<B: Backend>(
    backend: &B,
    required: &[String],
) -> Result<(), BootstrapError> {
    let available = backend.instance_layers().map_err(BootstrapError::Query)?;
    debug!("{} instance layers available", available.len());

    let missing = missing_layers(required, available.as_slice());
    if missing.is_empty() {
        return Ok(());
    }

    Err(BootstrapError::LayersUnavailable {
        missing: missing.into_iter().map(str::to_owned).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vulkan::testing::RecordingBackend;

    const EMPTY: &[&str] = &[];

    fn layers_supported(required: &[&str], available: &[&str]) -> bool {
        missing_layers(required, available).is_empty()
    }

    #[test]
    fn subset_is_supported() {
        assert!(layers_supported(&["LayerX"], &["LayerX"]));
        assert!(layers_supported(&["LayerX"], &["LayerY", "LayerX", "LayerZ"]));
        assert!(layers_supported(&["B", "A"], &["A", "B"]));
    }

    #[test]
    fn empty_requirement_is_always_supported() {
        assert!(layers_supported(EMPTY, EMPTY));
        assert!(layers_supported(EMPTY, &["LayerX"]));
    }

    #[test]
    fn nothing_available_fails_any_requirement() {
        assert!(!layers_supported(&["LayerX"], EMPTY));
    }

    #[test]
    fn comparison_is_exact() {
        assert!(!layers_supported(&["layerx"], &["LayerX"]));
        assert!(!layers_supported(&["LayerX"], &["LayerX_v2"]));
        assert!(!layers_supported(&["LayerX"], &["LayerX "]));
    }

    #[test]
    fn reports_only_missing_layers_in_order() {
        let missing = missing_layers(&["A", "B", "C"], &["B"]);
        assert_eq!(missing, vec!["A", "C"]);
    }

    #[test]
    fn check_queries_backend() {
        let backend = RecordingBackend::new(&["VK_LAYER_KHRONOS_validation"], &[]);
        let required = vec![String::from("VK_LAYER_KHRONOS_validation")];
        assert!(check_layer_support(&backend, &required).is_ok());

        let backend = RecordingBackend::new(&[], &[]);
        match check_layer_support(&backend, &required) {
            Err(BootstrapError::LayersUnavailable { missing }) => {
                assert_eq!(missing, required);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn check_reports_each_missing_layer_once() {
        let backend = RecordingBackend::new(&["LayerB"], &[]);
        let required: Vec<String> = ["LayerA", "LayerB", "LayerC"].map(String::from).into();
        match check_layer_support(&backend, &required) {
            Err(BootstrapError::LayersUnavailable { missing }) => {
                assert_eq!(missing, vec!["LayerA", "LayerC"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
