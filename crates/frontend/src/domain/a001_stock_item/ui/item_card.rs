use contracts::domain::a001_stock_item::Item;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

fn stock_color(item: &Item) -> BadgeColor {
    if item.in_stock() {
        BadgeColor::Success
    } else {
        BadgeColor::Danger
    }
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let stock_color = stock_color(&item);
    let stock = item.stock_display();
    let price = item.price_display();
    let location = item.location.clone();

    view! {
        <div class="card item-card">
            <div class="card__header">
                {icon("package")}
                <h2 class="section-title">"Item Encontrado"</h2>
            </div>
            <div class="card__body">
                <div class="item-card__field">
                    <span class="form__label">"Código"</span>
                    <span class="item-card__code">{item.code.clone()}</span>
                </div>
                <div class="item-card__field">
                    <span class="form__label">"Descrição"</span>
                    <span class="item-card__description">{item.description.clone()}</span>
                </div>
                <div class="item-card__grid">
                    <div class="item-card__field">
                        <span class="form__label">"Estoque"</span>
                        <Badge appearance=BadgeAppearance::Filled color=stock_color>
                            {stock}
                        </Badge>
                    </div>
                    <div class="item-card__field">
                        <span class="form__label">"Preço"</span>
                        <span class="item-card__price">{price}</span>
                    </div>
                </div>
                <div class="item-card__field item-card__field--location">
                    {icon("map-pin")}
                    <span class="form__label">"Localização"</span>
                    <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>
                        {location}
                    </Badge>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_color_follows_quantity() {
        let item = Item::new("00001013850064", "TAMPA ENCHIMENTO", 1, 225.15, "05A04");
        assert!(matches!(stock_color(&item), BadgeColor::Success));
        let empty = Item::new("1", "X", 0, 1.0, "A1");
        assert!(matches!(stock_color(&empty), BadgeColor::Danger));
    }

    #[test]
    fn test_badge_texts() {
        let item = Item::new("0000160521", "JUNTA DA TAMPA DO CABECOTE", 4, 629.06, "22D01");
        assert_eq!(item.stock_display(), "4 unid.");
        assert_eq!(item.price_display(), "R$ 629,06");
        assert_eq!(item.location, "22D01");
    }
}
