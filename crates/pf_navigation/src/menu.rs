/// Visibility of the compact navigation drawer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        MenuState { is_open: false }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::menu as sut;

    #[test]
    fn starts_closed() {
        assert!(!sut::MenuState::new().is_open());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut menu = sut::MenuState::new();

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_unconditional() {
        let mut menu = sut::MenuState::new();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
