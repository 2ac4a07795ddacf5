pub mod catalog;
pub mod city;
pub mod infrastructure;
pub mod named_coordinate;
