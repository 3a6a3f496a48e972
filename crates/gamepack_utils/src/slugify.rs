/// Lowercased, dash separated slug. `My Cool Game` and `myCoolGame` both become `my-cool-game`.
pub fn slugify(input: &str) -> String {
  let mut slug = String::with_capacity(input.len());
  let mut pending_dash = false;
  let mut prev: Option<char> = None;

  for char in input.chars() {
    let char = transliterate(char).unwrap_or(char);
    if char.is_ascii_alphanumeric() {
      let splits_camel_case = char.is_ascii_uppercase()
        && prev.is_some_and(|prev| prev.is_ascii_lowercase() || prev.is_ascii_digit());
      if (pending_dash || splits_camel_case) && !slug.is_empty() {
        slug.push('-');
      }
      pending_dash = false;
      slug.push(char.to_ascii_lowercase());
    } else if char == '&' {
      pending_dash = false;
      if !slug.is_empty() {
        slug.push('-');
      }
      slug.push_str("and");
      pending_dash = true;
    } else {
      pending_dash = true;
    }
    prev = Some(char);
  }

  slug
}

fn transliterate(char: char) -> Option<char> {
  let replaced = match char {
    'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
    'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
    'ç' => 'c',
    'Ç' => 'C',
    'è' | 'é' | 'ê' | 'ë' => 'e',
    'È' | 'É' | 'Ê' | 'Ë' => 'E',
    'ì' | 'í' | 'î' | 'ï' => 'i',
    'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
    'ñ' => 'n',
    'Ñ' => 'N',
    'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
    'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
    'ù' | 'ú' | 'û' | 'ü' => 'u',
    'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
    'ý' | 'ÿ' => 'y',
    'Ý' => 'Y',
    _ => return None,
  };
  Some(replaced)
}

#[test]
fn test_slugify() {
  assert_eq!(slugify("basic"), "basic");
  assert_eq!(slugify("My Cool Game"), "my-cool-game");
  assert_eq!(slugify("  The Hero's   Quest! "), "the-hero-s-quest");
  assert_eq!(slugify("myCoolGame2"), "my-cool-game2");
  assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
  assert_eq!(slugify("Cats & Dogs"), "cats-and-dogs");
}
