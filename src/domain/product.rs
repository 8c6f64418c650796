use super::ValidationError;

/// A row of the `productos` table.
///
/// Nothing here is normalized or validated beyond what the column types demand:
/// `id` is whatever the caller typed and is not required to be unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    id: String,
    nombre: String,
    marca: String,
    stock: i64
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

impl Product {

    pub fn new<S>(id: S, nombre: S, marca: S, stock: i64) -> Self
    where S: Into<String>
    {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            marca: marca.into(),
            stock
        }
    }

    /// Builds a product from raw form values.
    ///
    /// `stock` is coerced the way MySQL coerces a numeric string into a `BIGINT`
    /// column: decimals and exponents are rounded half away from zero, anything
    /// that is not a number is rejected.
    pub fn from_raw<S>(id: S, nombre: S, marca: S, stock: &str) -> Result<Self, ValidationError>
    where S: Into<String>
    {
        let stock = parse_stock(stock)
            .ok_or_else(|| ValidationError::StockIsNotANumber(stock.to_string()))?;

        Ok(Self::new(id, nombre, marca, stock))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn marca(&self) -> &str {
        &self.marca
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }
}

fn parse_stock(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(stock) = raw.parse::<i64>() {
        return Some(stock);
    }

    let value = raw.parse::<f64>().ok()?.round();
    // "inf" and "NaN" parse as f64 but are not numbers to SQL
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }

    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_parses_stock() -> Result<(), ValidationError> {
        let product = Product::from_raw("A-1", "Tornillo", "Acme", " 42 ")?;

        assert_eq!(product.id(), "A-1");
        assert_eq!(product.nombre(), "Tornillo");
        assert_eq!(product.marca(), "Acme");
        assert_eq!(product.stock(), 42);

        Ok(())
    }

    #[test]
    fn from_raw_keeps_empty_fields() -> Result<(), ValidationError> {
        let product = Product::from_raw("", "", "", "0")?;
        assert_eq!(product, Product::new("", "", "", 0));

        Ok(())
    }

    #[test]
    fn from_raw_rejects_non_numeric_stock() {
        let outcome = Product::from_raw("A-1", "Tornillo", "Acme", "muchos");
        assert!(matches!(outcome, Err(ValidationError::StockIsNotANumber(value)) if value == "muchos"));

        let outcome = Product::from_raw("A-1", "Tornillo", "Acme", "");
        assert!(outcome.is_err());

        let outcome = Product::from_raw("A-1", "Tornillo", "Acme", "inf");
        assert!(outcome.is_err());
    }

    #[test]
    fn from_raw_rounds_decimal_and_exponent_stock() -> Result<(), ValidationError> {
        assert_eq!(Product::from_raw("A-1", "Tornillo", "Acme", "1.5")?.stock(), 2);
        assert_eq!(Product::from_raw("A-1", "Tornillo", "Acme", "-2.5")?.stock(), -3);
        assert_eq!(Product::from_raw("A-1", "Tornillo", "Acme", "1.4")?.stock(), 1);
        assert_eq!(Product::from_raw("A-1", "Tornillo", "Acme", "1e3")?.stock(), 1000);
        assert_eq!(Product::from_raw("A-1", "Tornillo", "Acme", " 7 ")?.stock(), 7);

        Ok(())
    }
}
