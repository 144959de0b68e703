pub mod sync_view;
