pub mod compile;
pub mod layout;
pub mod merge;
pub mod scaffold;
pub mod watermelon;
