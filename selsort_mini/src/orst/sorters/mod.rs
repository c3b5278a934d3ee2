pub mod selection_sorter;
pub mod stable_selection_sorter;
