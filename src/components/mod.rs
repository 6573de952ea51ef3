pub mod carousel;
pub mod main_top_nav;
pub mod preloader;
pub mod sections;
pub mod video_modal;
