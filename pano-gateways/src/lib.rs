pub mod streetview;
