pub mod frame_names;
