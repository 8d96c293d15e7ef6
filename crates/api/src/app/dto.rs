use serde_json::{Map, Value};

use gamestore_infra::CurrentOffers;

// -------------------------
// JSON mapping helpers
// -------------------------

/// Flat keyed mapping served by `/catalog/special-offers`.
///
/// Game/console keys appear only when something of that kind is on special.
/// Discounted prices and the total are two-decimal strings.
pub fn special_offers_to_json(current: CurrentOffers) -> Value {
    let mut out = Map::new();

    if let Some(offer) = current.game {
        let game = offer.entity;
        out.insert("gameId".into(), Value::from(game.id.get()));
        out.insert("gameTitle".into(), Value::from(game.title));
        out.insert("gamePrice".into(), Value::from(game.price.amount()));
        out.insert("gameDiscountedPrice".into(), Value::from(offer.discounted_price.to_fixed()));
        out.insert("gameIsOnSpecial".into(), Value::from(game.is_on_special));
        out.insert("gameManufacturer".into(), Value::from(game.developer));
        out.insert("gameImage".into(), Value::from(game.image));
    }

    if let Some(offer) = current.console {
        let console = offer.entity;
        out.insert("consoleId".into(), Value::from(console.id.get()));
        out.insert("consoleModel".into(), Value::from(console.model));
        out.insert("consolePrice".into(), Value::from(console.price.amount()));
        out.insert(
            "consoleDiscountedPrice".into(),
            Value::from(offer.discounted_price.to_fixed()),
        );
        out.insert("consoleIsOnSpecial".into(), Value::from(console.is_on_special));
        out.insert("consoleManufacturer".into(), Value::from(console.manufacturer));
        out.insert("consoleImage".into(), Value::from(console.image));
    }

    out.insert(
        "totalDiscountedPrice".into(),
        Value::from(current.total_discounted_price.to_fixed()),
    );

    Value::Object(out)
}
