//! Which dropdown menu is open
//!
//! At most one dropdown on a page is open at a time.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownSet {
    open: Option<String>,
}
impl DropdownSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A click on the trigger of `id`: open it (closing every other one) or close it if it is
    /// already open
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opening_one_closes_the_others() {
        let mut set = DropdownSet::new();
        set.toggle("sort");
        assert!(set.is_open("sort"));
        set.toggle("genres");
        assert!(set.is_open("genres"));
        assert!(!set.is_open("sort"));
        assert_eq!(set.open_id(), Some("genres"));
    }

    #[test]
    fn toggle_twice_closes() {
        let mut set = DropdownSet::new();
        set.toggle("sort");
        set.toggle("sort");
        assert_eq!(set.open_id(), None);
    }

    #[test]
    fn outside_click_closes_everything() {
        let mut set = DropdownSet::new();
        set.toggle("account");
        set.close_all();
        assert!(!set.is_open("account"));
    }
}
