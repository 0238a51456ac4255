pub mod springsim_vis2d;
