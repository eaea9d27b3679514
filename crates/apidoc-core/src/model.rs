//! The whole documentation model, built in two phases
//!
//! Phase 1 ([`ApiModel::build`]) turns every class reflector into a
//! [`ClassDoc`] on its own. Phase 2 ([`ApiModel::update_references`]) runs
//! once all classes exist and only fills back-references.

use eyre::{Result, bail};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::class_doc::ClassDoc;
use crate::diagnostics::Diagnostics;
use crate::reflect::ClassReflector;

/// All documented classes of one run, keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct ApiModel {
    classes: IndexMap<String, ClassDoc>,
    diagnostics: Diagnostics,
}

impl ApiModel {
    /// Phase 1: build every class.
    ///
    /// Fails if two reflectors normalize to the same class name.
    pub fn build<R>(reflectors: &[R]) -> Result<Self>
    where
        R: ClassReflector + Sync,
    {
        let built = build_classes(reflectors);

        let mut model = ApiModel::default();
        for (class, diagnostics) in built {
            debug!(class = %class.name(), events = class.events.len(), constants = class.constants.len(), "built class");
            model.diagnostics.extend(diagnostics);
            if model.classes.contains_key(class.name()) {
                bail!("duplicate class in reflection data: {}", class.name());
            }
            model.classes.insert(class.name().to_string(), class);
        }

        info!(
            classes = model.classes.len(),
            warnings = model.diagnostics.len(),
            "built documentation model"
        );
        Ok(model)
    }

    /// Phase 2: fill [`ClassDoc::subclasses`] from every class's parent.
    ///
    /// Parents outside the model are ignored. Running it again gives the
    /// same result.
    pub fn update_references(&mut self) {
        let links: Vec<(String, String)> = self
            .classes
            .values()
            .filter_map(|class| {
                let parent = class.parent_class.as_ref()?;
                self.classes
                    .contains_key(parent)
                    .then(|| (parent.clone(), class.name().to_string()))
            })
            .collect();

        for class in self.classes.values_mut() {
            class.subclasses.clear();
        }
        for (parent, child) in links {
            if let Some(parent) = self.classes.get_mut(&parent) {
                parent.subclasses.push(child);
            }
        }
        debug!(classes = self.classes.len(), "updated subclass references");
    }

    pub fn class(&self, name: &str) -> Option<&ClassDoc> {
        self.classes.get(name)
    }

    /// Classes in reflection order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDoc> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Warnings collected during phase 1, in reflection order
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Build each class with its own warning log, keeping input order.
fn build_classes<R>(reflectors: &[R]) -> Vec<(ClassDoc, Diagnostics)>
where
    R: ClassReflector + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        reflectors.par_iter().map(build_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        build_classes_sequential(reflectors)
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn build_classes_sequential<R: ClassReflector>(reflectors: &[R]) -> Vec<(ClassDoc, Diagnostics)> {
    reflectors.iter().map(build_one).collect()
}

fn build_one<R: ClassReflector>(reflector: &R) -> (ClassDoc, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let class = ClassDoc::from_reflector(reflector, Some(&mut diagnostics));
    (class, diagnostics)
}
