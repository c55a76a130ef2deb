#[cfg(test)]
mod common;
#[cfg(test)]
mod test_position_index;
