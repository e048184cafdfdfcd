//! Scoped document side effects.
//!
//! Some sections change things outside their own subtree: the root view sets
//! the page body colours and font, the FAQ injects a JSON-LD script. Those
//! writes go through a [`ScopedPatch`], which applies the patch when it is
//! acquired and reverts it exactly once when released or dropped.

use std::fmt;

use tracing::{debug, warn};

use crate::catalog::{BODY_FONT, BRAND_NAVY};

/// A reversible change to the host document.
pub trait DocumentPatch {
    /// Short name for logs
    fn name(&self) -> &'static str;

    fn apply(&mut self);

    /// Undo whatever `apply` did. Only called after a successful `apply`.
    fn revert(&mut self);
}

/// RAII handle for an applied [`DocumentPatch`].
#[must_use = "the patch is reverted as soon as the guard is dropped"]
pub struct ScopedPatch<P: DocumentPatch> {
    patch: Option<P>,
}

impl<P: DocumentPatch> ScopedPatch<P> {
    pub fn acquire(mut patch: P) -> Self {
        debug!(patch = patch.name(), "Applying document patch");
        patch.apply();
        Self { patch: Some(patch) }
    }

    pub fn is_active(&self) -> bool {
        self.patch.is_some()
    }

    /// Revert now instead of waiting for drop.
    pub fn release(mut self) {
        self.revert();
    }

    fn revert(&mut self) {
        if let Some(mut patch) = self.patch.take() {
            debug!(patch = patch.name(), "Reverting document patch");
            patch.revert();
        }
    }
}

impl<P: DocumentPatch> Drop for ScopedPatch<P> {
    fn drop(&mut self) {
        self.revert();
    }
}

/// Inline style applied to `<body>` while the site is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyStyle {
    pub background_color: &'static str,
    pub color: &'static str,
    pub font_family: &'static str,
}

impl BodyStyle {
    /// (CSS property, value) pairs in application order
    pub fn declarations(&self) -> [(&'static str, &'static str); 3] {
        [
            ("background-color", self.background_color),
            ("color", self.color),
            ("font-family", self.font_family),
        ]
    }
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            background_color: BRAND_NAVY,
            color: "white",
            font_family: BODY_FONT,
        }
    }
}

/// Inline style storage written by the body patch.
pub trait StyleTarget {
    type Error: fmt::Display;

    /// Current value, empty when unset
    fn property(&self, name: &str) -> Result<String, Self::Error>;

    fn set_property(&self, name: &str, value: &str) -> Result<(), Self::Error>;

    fn remove_property(&self, name: &str) -> Result<(), Self::Error>;
}

/// Set each declaration and return the values they replaced.
///
/// If a write fails, the declarations already written are put back before
/// the error is returned, so a failed apply leaves the target as it was.
pub fn apply_declarations<T: StyleTarget>(
    target: &T,
    declarations: &[(&'static str, &'static str)],
) -> Result<Vec<(&'static str, String)>, T::Error> {
    let mut previous = Vec::with_capacity(declarations.len());
    for (property, value) in declarations {
        let written = target
            .property(property)
            .and_then(|old| target.set_property(property, value).map(|()| old));

        match written {
            Ok(old) => previous.push((*property, old)),
            Err(err) => {
                if let Err(rollback) = restore_declarations(target, &previous) {
                    warn!(error = %rollback, "Style rollback incomplete");
                }
                return Err(err);
            }
        }
    }
    Ok(previous)
}

/// Put back values returned by [`apply_declarations`]. Empty values are
/// removed rather than set. Every entry is attempted; the first error is
/// returned.
pub fn restore_declarations<T: StyleTarget>(
    target: &T,
    previous: &[(&'static str, String)],
) -> Result<(), T::Error> {
    let mut first_error = None;
    for (property, old) in previous.iter().rev() {
        let result = if old.is_empty() {
            target.remove_property(property)
        } else {
            target.set_property(property, old)
        };
        if let Err(err) = result {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records apply/revert calls into a shared log
    struct Recorder {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl DocumentPatch for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn apply(&mut self) {
            self.log.borrow_mut().push("apply");
        }

        fn revert(&mut self) {
            self.log.borrow_mut().push("revert");
        }
    }

    #[test]
    fn drop_reverts_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let guard = ScopedPatch::acquire(Recorder { log: log.clone() });
            assert!(guard.is_active());
            assert_eq!(*log.borrow(), vec!["apply"]);
        }
        assert_eq!(*log.borrow(), vec!["apply", "revert"]);
    }

    #[test]
    fn release_reverts_and_drop_does_not_repeat() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let guard = ScopedPatch::acquire(Recorder { log: log.clone() });
        guard.release();
        assert_eq!(*log.borrow(), vec!["apply", "revert"]);
    }

    /// In-memory style that refuses writes to one property
    #[derive(Default)]
    struct FakeStyle {
        values: RefCell<Vec<(String, String)>>,
        reject: Option<&'static str>,
    }

    impl FakeStyle {
        fn with(values: &[(&str, &str)]) -> Self {
            Self {
                values: RefCell::new(
                    values
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                reject: None,
            }
        }

        fn get(&self, name: &str) -> Option<String> {
            self.values
                .borrow()
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    impl StyleTarget for FakeStyle {
        type Error = String;

        fn property(&self, name: &str) -> Result<String, String> {
            Ok(self.get(name).unwrap_or_default())
        }

        fn set_property(&self, name: &str, value: &str) -> Result<(), String> {
            if self.reject == Some(name) {
                return Err(format!("cannot set {name}"));
            }
            self.remove_property(name)?;
            self.values
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn remove_property(&self, name: &str) -> Result<(), String> {
            self.values.borrow_mut().retain(|(k, _)| k != name);
            Ok(())
        }
    }

    #[test]
    fn apply_then_restore_returns_to_previous_values() {
        let style = FakeStyle::with(&[("color", "black")]);
        let previous = apply_declarations(&style, &BodyStyle::default().declarations()).unwrap();

        assert_eq!(style.get("color").as_deref(), Some("white"));
        assert_eq!(style.get("background-color").as_deref(), Some(BRAND_NAVY));

        restore_declarations(&style, &previous).unwrap();
        assert_eq!(style.get("color").as_deref(), Some("black"));
        assert_eq!(style.get("background-color"), None);
        assert_eq!(style.get("font-family"), None);
    }

    #[test]
    fn failed_write_rolls_back_earlier_declarations() {
        let mut style = FakeStyle::with(&[("background-color", "red")]);
        style.reject = Some("font-family");

        let result = apply_declarations(&style, &BodyStyle::default().declarations());

        assert_eq!(result, Err("cannot set font-family".to_string()));
        assert_eq!(style.get("background-color").as_deref(), Some("red"));
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn default_body_style_uses_brand() {
        let style = BodyStyle::default();
        assert_eq!(style.declarations()[0], ("background-color", "#071C3A"));
        assert_eq!(style.declarations()[1], ("color", "white"));
    }
}
