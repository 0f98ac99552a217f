use heck::ToSnakeCase;

/// Converts a field or type name to its lower `snake_case` form.
///
/// `CreatedAt` becomes `created_at` and `ID` becomes `id`. Applying the
/// function to its own output returns the same string.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Derives a table name from a type name: snake case, with the final word
/// pluralized (`Article` → `articles`, `BlogPost` → `blog_posts`).
pub fn table_name(type_name: &str) -> String {
    let snake = snake_case(type_name);

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(&snake, 2, false),
    }
}
