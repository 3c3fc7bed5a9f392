mod currency;
mod percentage;
