mod helpers;


// Randomized cross-realization agreement
mod tests_parity;
