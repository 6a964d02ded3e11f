//! Lazily filtered view over a job's new builds.

use crate::Build;
use std::{fmt, rc::Rc, slice};

type Predicate<'a> = Rc<dyn Fn(&Build) -> bool + 'a>;

/// Builds discovered since the last poll.
///
/// [`RunList::filter`] stacks predicates and returns another `RunList`; nothing is collected
/// until the view is iterated.
#[derive(Clone)]
pub struct RunList<'a> {
    builds: &'a [Rc<Build>],
    filters: Vec<Predicate<'a>>,
}

impl<'a> RunList<'a> {
    pub(crate) fn new(builds: &'a [Rc<Build>]) -> Self {
        Self {
            builds,
            filters: Vec::new(),
        }
    }

    /// Narrow the view to builds matching `predicate` as well as every earlier filter.
    #[must_use]
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Build) -> bool + 'a,
    {
        self.filters.push(Rc::new(predicate));
        self
    }

    pub fn iter(&self) -> Iter<'a, '_> {
        Iter {
            inner: self.builds.iter(),
            filters: &self.filters,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a Build> {
        self.iter().next()
    }

    #[must_use]
    pub fn contains(&self, build: &Build) -> bool {
        self.iter().any(|candidate| candidate == build)
    }
}

impl fmt::Debug for RunList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunList")
            .field("builds", &self.builds.len())
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl<'a, 'r> IntoIterator for &'r RunList<'a> {
    type Item = &'a Build;
    type IntoIter = Iter<'a, 'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the builds of a [`RunList`] that pass all of its filters.
pub struct Iter<'a, 'r> {
    inner: slice::Iter<'a, Rc<Build>>,
    filters: &'r [Predicate<'a>],
}

impl<'a> Iterator for Iter<'a, '_> {
    type Item = &'a Build;

    fn next(&mut self) -> Option<Self::Item> {
        let filters = self.filters;
        self.inner
            .by_ref()
            .map(|build| &**build)
            .find(|build| filters.iter().all(|predicate| predicate(*build)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildResult, BuildStateRecipe, Recipe};

    fn arena() -> Vec<Rc<Build>> {
        vec![
            Rc::new(BuildStateRecipe::new().with_number(3).that_is_still_building().get()),
            Rc::new(BuildStateRecipe::new().with_number(2).that_failed().get()),
            Rc::new(BuildStateRecipe::new().with_number(1).that_succeeded().get()),
        ]
    }

    #[test]
    fn unfiltered_view_keeps_insertion_order() {
        let builds = arena();
        let view = RunList::new(&builds);
        let numbers: Vec<&str> = view.iter().map(|b| b.number().as_str()).collect();
        assert_eq!(numbers, ["3", "2", "1"]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn filters_compose() {
        let builds = arena();
        let finished = RunList::new(&builds).filter(|b| !b.is_building());
        assert_eq!(finished.len(), 2);

        let failed = finished.clone().filter(|b| b.result() == Some(BuildResult::Failure));
        assert_eq!(failed.len(), 1);
        assert_eq!(failed.first().map(|b| b.number().as_str()), Some("2"));
        assert_eq!(finished.len(), 2);
    }

    #[test]
    fn filter_can_empty_the_view() {
        let builds = arena();
        let view = RunList::new(&builds).filter(|_| false);
        assert!(view.is_empty());
        assert_eq!((&view).into_iter().count(), 0);
    }
}
