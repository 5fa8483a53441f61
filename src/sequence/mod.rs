//! A small walkthrough of everyday `Vec` operations, plus the index lookup it uses.

/// Index of the first element equal to `target`.
pub fn position_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Index of the first element equal to `target`, or `-1` when absent.
///
/// ```
/// use quote_scrape::sequence::find_in_list;
///
/// assert_eq!(find_in_list(&[10, 20, 30], &20), 1);
/// assert_eq!(find_in_list(&[10, 20, 30], &99), -1);
/// ```
pub fn find_in_list<T: PartialEq>(items: &[T], target: &T) -> isize {
    position_of(items, target)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(-1)
}

/// Removes the first element equal to `target`. Returns whether one was removed.
pub fn remove_first<T: PartialEq>(items: &mut Vec<T>, target: &T) -> bool {
    match position_of(items, target) {
        Some(i) => {
            items.remove(i);
            true
        }
        None => false,
    }
}

/// Each element squared.
pub fn squares(items: &[i64]) -> Vec<i64> {
    items.iter().map(|x| x * x).collect()
}

/// State recorded at the end of [`Walkthrough::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    /// The list after every mutation.
    pub items: Vec<i64>,
    /// What `pop` returned.
    pub popped: Option<i64>,
    /// `items` squared.
    pub squares: Vec<i64>,
    /// `find_in_list(items, 2)`.
    pub index_of_2: isize,
    /// `find_in_list(items, 10)`.
    pub index_of_10: isize,
}

impl Walkthrough {
    /// Starts from `[1, 2, 3, 4, 5]`, appends 6, inserts 0 at the front,
    /// removes the first 3 and pops the tail.
    pub fn run() -> Self {
        let mut items: Vec<i64> = vec![1, 2, 3, 4, 5];

        items.push(6);
        items.insert(0, 0);

        remove_first(&mut items, &3);
        let popped = items.pop();

        let squares = squares(&items);
        let index_of_2 = find_in_list(&items, &2);
        let index_of_10 = find_in_list(&items, &10);

        Self {
            items,
            popped,
            squares,
            index_of_2,
            index_of_10,
        }
    }

    /// The lines the `list-walkthrough` binary prints.
    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        out.push(format!("{:?}", self.squares));
        out.push(format!("Index of 2: {}", self.index_of_2));
        out.push(format!("Index of 10: {}", self.index_of_10));
        out
    }
}
