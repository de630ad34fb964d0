pub mod filter_form;
pub mod header;
pub mod icons;
pub mod pagination;
pub mod variant_table;
