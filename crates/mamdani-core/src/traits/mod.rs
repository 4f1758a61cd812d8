pub mod defuzzifier;

pub use defuzzifier::IDefuzzifier;
