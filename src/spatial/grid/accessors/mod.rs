mod age;
mod material;
mod slices;
mod temperature;
