use crate::{
    FeatureType,
    SampleWeighting,
    SplitCriteria,
    TrainingSet,
    WeakLearner,
};
use crate::constants::IMPURITY_TOLERANCE;


use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};
use super::{
    node::*,
    criterion::*,
    train_node::*,
    decision_tree_classifier::DecisionTreeClassifier,
};


use std::fmt;


/// The Decision Tree algorithm.
/// Given a training set, the column types,
/// and a weighting of the set carrying the response to fit,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// The construction follows the book:
/// [Classification and Regression
/// Trees](https://www.amazon.com/Classification-Regression-Wadsworth-Statistics-Probability/dp/0412048418)
/// by Leo Breiman, Jerome H. Friedman, Richard A. Olshen, and Charles J. Stone.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::weak_learner::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use boostform::prelude::*;
///
/// let samples = vec![
///     Sample::new(vec![0.0], -1.0),
///     Sample::new(vec![1.0],  1.0),
/// ];
/// let set = TrainingSet::from_samples(&samples).unwrap();
///
/// // A decision stump with `±1` leaves.
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(1)
///     .criterion(SplitCriteria::Misclass)
///     .leaf_value(LeafValue::Vote)
///     .build();
///
/// let weighting = SampleWeighting::uniform(set.votes(), 1.0);
/// let f = tree.produce(&set, &set.feature_types(), &weighting);
///
/// assert_eq!(f.predict(&[0.0]), -1);
/// assert_eq!(f.predict(&[1.0]), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    criterion: SplitCriteria,
    leaf: LeafValue,
    max_depth: Depth,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        criterion: SplitCriteria,
        leaf: LeafValue,
        max_depth: Depth,
    ) -> Self
    {
        Self { criterion, leaf, max_depth, }
    }


    /// Construct a binary tree of depth at most `depth`.
    fn full_tree(
        &self,
        sample: &TrainingSet,
        types: &[FeatureType],
        dist: &[f64],
        response: &[f64],
        indices: Vec<usize>,
        depth: Depth,
    ) -> TrainNode
    {
        let stats = NodeStats::from_indices(dist, response, &indices[..]);
        let conf = Confidence::from(self.leaf.value(&stats));
        let total_weight = stats.weight;


        // A pure node or a node at the maximal depth becomes a leaf.
        let impurity = self.criterion.impurity(&stats);
        if impurity <= IMPURITY_TOLERANCE || depth < 1 {
            return TrainNode::leaf(conf, total_weight);
        }


        // Find the best pair of feature and threshold
        // based on the criterion.
        // If every feature is constant on this node, stop here.
        let split = self.criterion.best_split(
            sample, types, dist, response, &indices[..]
        );
        let Some((feature, threshold, _)) = split else {
            return TrainNode::leaf(conf, total_weight);
        };
        let rule = Splitter::new(feature, threshold);


        // Split the train data for left/right childrens
        let column = &sample[feature];
        let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| column[i] < rule.threshold.0);


        if lindices.is_empty() || rindices.is_empty() {
            return TrainNode::leaf(conf, total_weight);
        }


        // At this point, `depth > 0` is guaranteed so that
        // one can grow the tree.
        let depth = depth - 1;
        let ltree = self.full_tree(sample, types, dist, response, lindices, depth);
        let rtree = self.full_tree(sample, types, dist, response, rindices, depth);


        TrainNode::branch(rule, ltree, rtree, conf, total_weight)
    }


    /// Recomputes the value and the mass of every node
    /// from the examples at `indices` routed through `node`.
    fn refit(
        &self,
        node: &mut TrainNode,
        sample: &TrainingSet,
        dist: &[f64],
        response: &[f64],
        indices: Vec<usize>,
    )
    {
        let stats = NodeStats::from_indices(dist, response, &indices[..]);
        let conf = Confidence::from(self.leaf.value(&stats));

        match node {
            TrainNode::Leaf(leaf) => {
                leaf.confidence = conf;
                leaf.total_weight = stats.weight;
            },
            TrainNode::Branch(branch) => {
                branch.confidence = conf;
                branch.total_weight = stats.weight;

                let column = &sample[branch.rule.feature];
                let threshold = branch.rule.threshold.0;
                let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices
                    .into_iter()
                    .partition(|&i| column[i] < threshold);

                self.refit(&mut branch.left, sample, dist, response, lindices);
                self.refit(&mut branch.right, sample, dist, response, rindices);
            },
        }
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", format!("{}", self.criterion)),
            ("Leaf value", format!("{}", self.leaf)),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 1. construct a `TrainNode` which contains some information
    ///     to grow a tree (e.g., total distribution mass)
    ///     on the examples that survive trimming,
    /// 2. recompute the node values on all the examples
    ///     under the untrimmed distribution,
    /// 3. collapse the branches that output a single value,
    /// 4. convert `TrainNode` to `Node` that pares redundant information.
    #[inline]
    fn produce(
        &self,
        sample: &TrainingSet,
        types: &[FeatureType],
        weighting: &SampleWeighting,
    ) -> Self::Hypothesis
    {
        let n_sample = sample.shape().0;
        let response = weighting.response();
        let trimmed = weighting.trimmed();

        let mut indices = (0..n_sample).filter(|&i| trimmed[i] > 0f64)
            .collect::<Vec<usize>>();
        if indices.is_empty() {
            indices = (0..n_sample).collect();
        }

        let mut tree = self.full_tree(
            sample, types, &trimmed[..], response, indices, self.max_depth
        );
        let all = (0..n_sample).collect::<Vec<usize>>();
        self.refit(&mut tree, sample, weighting.weights(), response, all);
        let tree = tree.remove_redundant_nodes();

        let root = Node::from(tree);
        DecisionTreeClassifier::from(root)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Weak Learner\n\n\
            - Max depth: {}\n\
            - Splitting criterion: {}\n\
            - Leaf value: {}\n\
            ----------\
            ",
            self.max_depth,
            self.criterion,
            self.leaf,
        )
    }
}
