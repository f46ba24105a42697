use crate::models::classifier_trait::ClassifierModel;

/// Zero-argument model constructor. The evaluator calls one per
/// registered name per fold so no state carries across folds.
pub type ModelBuilder = Box<dyn Fn() -> Box<dyn ClassifierModel>>;

/// Constructor parameterized by an explicit feature support. Used by
/// the annealing and genetic searches to refit candidates on a given
/// subset.
pub type SupportModelBuilder = Box<dyn Fn(Vec<usize>) -> Box<dyn ClassifierModel>>;

/// Constructor parameterized by the number of top-ranked features to
/// keep. Used by the exhaustive sweep; the ranking itself (e.g. mutual
/// information) lives in the wrapped model.
pub type RankedModelBuilder = Box<dyn Fn(usize) -> Box<dyn ClassifierModel>>;
