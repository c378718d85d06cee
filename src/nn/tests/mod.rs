mod network;
mod ops_conv2d;
mod zoo;
