pub mod calorie;
