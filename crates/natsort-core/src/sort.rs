use std::cmp::Ordering;

/// Extension trait for sorting slices of string-like values with a string
/// comparison function.
pub trait StringSort {
    fn string_sort(&mut self, cmp: impl Fn(&str, &str) -> Ordering);
    fn string_sort_unstable(&mut self, cmp: impl Fn(&str, &str) -> Ordering);
}

impl<A: AsRef<str>> StringSort for [A] {
    fn string_sort(&mut self, cmp: impl Fn(&str, &str) -> Ordering) {
        self.sort_by(|lhs, rhs| cmp(lhs.as_ref(), rhs.as_ref()));
    }

    fn string_sort_unstable(&mut self, cmp: impl Fn(&str, &str) -> Ordering) {
        self.sort_unstable_by(|lhs, rhs| cmp(lhs.as_ref(), rhs.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural_cmp;

    #[test]
    fn sorts_any_string_like_slice() {
        let mut owned = vec![String::from("img10"), String::from("img2")];
        owned.string_sort(natural_cmp);
        assert_eq!(owned, vec!["img2", "img10"]);

        let mut borrowed = ["b", "a", "c"];
        borrowed.string_sort_unstable(natural_cmp);
        assert_eq!(borrowed, ["a", "b", "c"]);
    }
}
