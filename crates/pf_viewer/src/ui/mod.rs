pub mod menu_drawer;
pub mod page;
pub mod top_panel;

pub(crate) use {self::menu_drawer::menu_drawer, self::page::page, self::top_panel::top_panel};
