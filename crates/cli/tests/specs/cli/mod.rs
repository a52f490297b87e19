mod help;
mod lenses;
mod run;
