mod fixture;
mod mock;
