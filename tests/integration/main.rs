mod e2e_functional;
mod helpers;
