//! The public surface: a trainable classification transform.
use rayon::prelude::*;

use crate::{
    BoostEngine,
    BoostError,
    BoostParams,
    Classifier,
    Configuration,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Ensemble,
    Logger,
    Result,
    Template,
    TrainingSet,

    booster::cross_validation,
    common::checker,
    persist,
};

use std::io::{Read, Write};


/// A trainable binary classifier over feature vectors.
///
/// [`ClassificationTransform::train`] fits a boosted ensemble
/// of decision trees on labeled [`Template`]s.
/// Afterwards, [`ClassificationTransform::predict`] returns
/// either the class label or the normalized confidence
/// of a feature vector,
/// and [`ClassificationTransform::project`] writes that response
/// back into a template.
///
/// Training takes `&mut self`, prediction takes `&self`.
/// A trained transform can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ClassificationTransform {
    config: Configuration,
    ensemble: Option<Ensemble<DecisionTreeClassifier>>,
}


impl ClassificationTransform {
    /// Construct an untrained transform with the given options.
    pub fn new(config: Configuration) -> Self {
        Self { config, ensemble: None, }
    }


    /// Replace the options.
    /// A trained ensemble belongs to the old options, so it is dropped.
    /// On error, the transform is left untouched.
    pub fn configure(&mut self, params: BoostParams) -> Result<()> {
        self.config = params.check()?;
        self.ensemble = None;
        Ok(())
    }


    /// Returns the options.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }


    /// Returns the trained ensemble, if any.
    pub fn ensemble(&self) -> Option<&Ensemble<DecisionTreeClassifier>> {
        self.ensemble.as_ref()
    }


    /// Returns `true` if an ensemble has been trained or loaded.
    pub fn is_trained(&self) -> bool {
        self.ensemble.is_some()
    }


    /// Train on `templates`, whose labels are read
    /// from the field named by the `input_variable` option.
    /// The current ensemble is replaced only on success.
    pub fn train(&mut self, templates: &[Template]) -> Result<()> {
        let set = TrainingSet::from_templates(
            templates, self.config.input_variable()
        )?;
        self.train_set(&set)
    }


    /// Train on a prepared training set.
    /// The current ensemble is replaced only on success.
    pub fn train_set(&mut self, set: &TrainingSet) -> Result<()> {
        let config = &self.config;
        let tree = DecisionTreeBuilder::from_config(config).build();
        let types = set.feature_types();

        let mut engine = BoostEngine::init(set, config)
            .feature_types(types);
        if config.folds() > 0 {
            if let Some(best) = cross_validation::best_round(set, config, &tree) {
                engine = engine.force_quit_at(best);
            }
        }

        let ensemble = Logger::new(engine, tree)
            .print_every(config.print_every())
            .run()?;
        self.ensemble = Some(ensemble);
        Ok(())
    }


    fn trained(&self) -> Result<&Ensemble<DecisionTreeClassifier>> {
        self.ensemble.as_ref().ok_or(BoostError::UntrainedModel)
    }


    /// Returns the response of the ensemble on `x`:
    /// the normalized confidence if `return_confidence` is set,
    /// the class label otherwise.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        let ensemble = self.trained()?;
        checker::check_dimension(ensemble.n_features(), x)?;

        let response = if self.config.return_confidence() {
            ensemble.confidence(x)
        } else {
            ensemble.predict_label(x)
        };
        Ok(response)
    }


    /// Returns a copy of `template` carrying the response on its data.
    /// If `overwrite_mat` is set, the data is replaced by `[response]`,
    /// otherwise the response is stored in the field `output_variable`.
    pub fn project(&self, template: &Template) -> Result<Template> {
        let response = self.predict(&template.data[..])?;

        let mut output = template.clone();
        if self.config.overwrite_mat() {
            output.data = vec![response];
        } else {
            output.set(self.config.output_variable(), response);
        }
        Ok(output)
    }


    /// Projects every template in parallel.
    /// Fails if any template fails.
    pub fn project_all(&self, templates: &[Template]) -> Result<Vec<Template>> {
        templates.par_iter()
            .map(|template| self.project(template))
            .collect()
    }


    /// Encode the trained ensemble.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        persist::to_bytes(self.trained()?)
    }


    /// Replace the ensemble by the one encoded in `bytes`.
    /// On error, the transform is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensemble = Some(persist::from_bytes(bytes)?);
        Ok(())
    }


    /// Write the trained ensemble to `writer`.
    pub fn store<W: Write>(&self, writer: W) -> Result<()> {
        persist::write_to(self.trained()?, writer)
    }


    /// Replace the ensemble by the one read from `reader`.
    /// On error, the transform is left untouched.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        self.ensemble = Some(persist::read_from(reader)?);
        Ok(())
    }
}
