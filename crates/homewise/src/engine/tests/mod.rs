mod common;
mod health;
mod normalizer;
