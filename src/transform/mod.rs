/// Pure 2x3 affine algebra for cumulative transforms.
pub mod affine;
