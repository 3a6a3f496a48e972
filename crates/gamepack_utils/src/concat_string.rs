/// Concatenates string-like values with a single allocation.
///
/// ```ignore
/// let s = concat_string!("require(", specifier, ")");
/// ```
#[macro_export]
macro_rules! concat_string {
  () => {
    String::with_capacity(0)
  };
  ($($s:expr),+ $(,)?) => {{
    use std::ops::AddAssign;
    let mut len = 0;
    $(len.add_assign(AsRef::<str>::as_ref(&$s).len());)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let name = String::from("regal");
  assert_eq!(concat_string!("require(\"", name, "\")"), "require(\"regal\")");
  assert_eq!(concat_string!(), "");
}
