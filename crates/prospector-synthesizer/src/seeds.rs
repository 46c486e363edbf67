//! Hand-authored seed companies, five per industry
//!
//! Revenue values are in units of 100 million yen and agree with the
//! `売上高` figure in each snippet.

use prospector_domain::Industry;

/// One seed company
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedEntry {
    /// `株式会社Name | tagline`
    pub title: &'static str,
    /// Homepage URL
    pub url: &'static str,
    /// Search-snippet style description
    pub snippet: &'static str,
    /// Revenue in 億円
    pub revenue_value: f64,
}

/// Seeds for an industry
pub fn seeds_for(industry: Industry) -> &'static [SeedEntry] {
    match industry {
        Industry::Beauty => &BEAUTY,
        Industry::ItSaas => &IT_SAAS,
        Industry::RealEstate => &REAL_ESTATE,
        Industry::Fintech => &FINTECH,
        Industry::Healthcare => &HEALTHCARE,
        Industry::Retail => &RETAIL,
        Industry::Manufacturing => &MANUFACTURING,
        Industry::Food => &FOOD,
        Industry::Education => &EDUCATION,
        Industry::Logistics => &LOGISTICS,
    }
}

const BEAUTY: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社ビューティーテック | D2C化粧品ブランド",
        url: "https://example-beauty-tech.com",
        snippet: "美容業界でD2Cに注力する化粧品企業。2018年設立、従業員70名、売上高52億円、営業利益6億円。スキンケア・メイクアップ製品をEC・SNS中心に展開し、Z世代から高い支持。",
        revenue_value: 52.0,
    },
    SeedEntry {
        title: "株式会社コスメイノベーション | オーガニックコスメ",
        url: "https://example-cosme-innovation.com",
        snippet: "美容業界のスタートアップ企業。2020年設立、従業員45名、売上高32億円、営業利益4億円。オーガニック化粧品のD2C販売に注力し、サブスクモデルで急成長中。",
        revenue_value: 32.0,
    },
    SeedEntry {
        title: "株式会社メディカルビューティー | 美容クリニック運営",
        url: "https://example-medical-beauty.com",
        snippet: "美容医療クリニックチェーンを展開。2017年設立、従業員120名、売上高85億円、営業利益12億円。美容業界でのDX推進とオンラインカウンセリングを強化。",
        revenue_value: 85.0,
    },
    SeedEntry {
        title: "株式会社ビューティーソリューション | 美容サロン向けSaaS",
        url: "https://example-beauty-solution.com",
        snippet: "美容サロン向け予約・顧客管理システムを提供。2019年設立、従業員35名、売上高18億円、営業利益2億円。全国2000店舗以上が導入。",
        revenue_value: 18.0,
    },
    SeedEntry {
        title: "ヘアケアテック株式会社 | ヘアケア製品D2C",
        url: "https://example-haircare-tech.com",
        snippet: "AI診断を活用したパーソナライズヘアケア製品を展開。2021年設立、従業員28名、売上高8億円、営業利益0.8億円。美容業界でテクノロジーとの融合を推進。",
        revenue_value: 8.0,
    },
];

const IT_SAAS: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社テックイノベーション | AI・DX推進企業",
        url: "https://example-tech-innovation.com",
        snippet: "2020年設立のAI・DX推進企業。中小企業向けのデジタル化支援を行っています。従業員数50名、売上高15億円、営業利益2億円。AI技術とクラウドサービスを活用したDX推進を強化。",
        revenue_value: 15.0,
    },
    SeedEntry {
        title: "株式会社グローバルソリューションズ | SaaS開発",
        url: "https://example-global-solutions.com",
        snippet: "クラウド型業務管理SaaSシステムを開発・提供。2018年設立、従業員80名、売上高25億円、営業利益3億円。グローバル展開を注力ポイントとして海外市場への進出を強化中。シリーズA調達済み。",
        revenue_value: 25.0,
    },
    SeedEntry {
        title: "マーケティングテック株式会社 | マーケティングオートメーション",
        url: "https://example-marketing-tech.com",
        snippet: "マーケティングオートメーションツールを提供。2019年設立、従業員30名、売上高8億円、営業利益1億円。中小企業向けMA市場でのシェア拡大に注力。",
        revenue_value: 8.0,
    },
    SeedEntry {
        title: "株式会社エンタープライズクラウド | エンタープライズ向けクラウドサービス",
        url: "https://example-enterprise-cloud.com",
        snippet: "大企業向けクラウドインフラサービスを提供。2017年設立、従業員120名、売上高50億円、営業利益8億円。エンタープライズ市場での基盤強化と新規事業開発に注力。シリーズB調達済み。",
        revenue_value: 50.0,
    },
    SeedEntry {
        title: "株式会社AIプラットフォーム | AI開発基盤提供",
        url: "https://example-ai-platform.com",
        snippet: "AI開発・運用プラットフォームを提供するSaaS企業。2018年設立、従業員90名、売上高110億円、営業利益18億円。大手企業のAI導入を支援。",
        revenue_value: 110.0,
    },
];

const REAL_ESTATE: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社プロップテック | 不動産テックプラットフォーム",
        url: "https://example-proptech.com",
        snippet: "不動産業界向けDXソリューションを提供。2019年設立、従業員55名、売上高28億円、営業利益3.5億円。物件管理・契約業務のデジタル化を推進。",
        revenue_value: 28.0,
    },
    SeedEntry {
        title: "株式会社スマートエステート | AI物件査定",
        url: "https://example-smartestate.com",
        snippet: "AIを活用した不動産査定サービスを展開。2020年設立、従業員40名、売上高45億円、営業利益5億円。不動産業界でのスタートアップとして急成長。",
        revenue_value: 45.0,
    },
    SeedEntry {
        title: "株式会社リアルティイノベーション | 不動産仲介プラットフォーム",
        url: "https://example-realty-innovation.com",
        snippet: "オンライン不動産仲介プラットフォームを運営。2018年設立、従業員75名、売上高62億円、営業利益8億円。不動産取引のオンライン完結を実現。",
        revenue_value: 62.0,
    },
    SeedEntry {
        title: "株式会社不動産テックソリューションズ | 賃貸管理システム",
        url: "https://example-realestate-tech-sol.com",
        snippet: "賃貸管理システムのSaaS提供。2017年設立、従業員100名、売上高120億円、営業利益15億円。全国の不動産会社5000社以上が利用。",
        revenue_value: 120.0,
    },
    SeedEntry {
        title: "株式会社ホームリノベーションテック | リノベーション支援",
        url: "https://example-home-renovation-tech.com",
        snippet: "リノベーション・リフォームのマッチングプラットフォーム。2021年設立、従業員32名、売上高9億円、営業利益0.9億円。中古住宅×テクノロジーで市場開拓。",
        revenue_value: 9.0,
    },
];

const FINTECH: [SeedEntry; 5] = [
    SeedEntry {
        title: "フィンテック株式会社 | 金融×テクノロジー",
        url: "https://example-fintech.com",
        snippet: "決済システムと金融プラットフォームを開発。2021年設立、従業員45名、売上高12億円、営業利益1.5億円。フィンテック領域での新サービス開発とR&D強化に注力。",
        revenue_value: 12.0,
    },
    SeedEntry {
        title: "株式会社ペイメントイノベーション | 決済サービス",
        url: "https://example-payment-innovation.com",
        snippet: "オンライン決済ソリューションを提供。2019年設立、従業員68名、売上高38億円、営業利益4億円。中小企業向け決済サービスでシェアを拡大。",
        revenue_value: 38.0,
    },
    SeedEntry {
        title: "株式会社デジタルバンク | ネット銀行",
        url: "https://example-digital-bank.com",
        snippet: "スマートフォン特化型銀行サービス。2018年設立、従業員150名、売上高95億円、営業利益12億円。若年層を中心に口座数200万突破。",
        revenue_value: 95.0,
    },
    SeedEntry {
        title: "株式会社ロボアドバイザー | 資産運用AI",
        url: "https://example-roboadvisor.com",
        snippet: "AI活用の資産運用サービスを提供。2020年設立、従業員42名、売上高18億円、営業利益2億円。運用資産残高500億円超。",
        revenue_value: 18.0,
    },
    SeedEntry {
        title: "株式会社クレジットテック | 与信審査AI",
        url: "https://example-credit-tech.com",
        snippet: "AI与信審査プラットフォームを展開。2019年設立、従業員55名、売上高8億円、営業利益0.8億円。金融機関向けに審査精度向上サービスを提供。",
        revenue_value: 8.0,
    },
];

const HEALTHCARE: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社メディカルテック | オンライン診療プラットフォーム",
        url: "https://example-medicaltech.com",
        snippet: "オンライン診療・遠隔医療プラットフォームを提供。2019年設立、従業員85名、売上高42億円、営業利益5億円。医療DXを推進し、提携医療機関2000施設突破。",
        revenue_value: 42.0,
    },
    SeedEntry {
        title: "株式会社ヘルスケアイノベーション | 健康管理アプリ",
        url: "https://example-healthcare-innovation.com",
        snippet: "AI活用の健康管理・予防医療アプリを開発。2020年設立、従業員52名、売上高18億円、営業利益2億円。ユーザー数100万人突破。",
        revenue_value: 18.0,
    },
    SeedEntry {
        title: "株式会社ファーマテック | 調剤薬局支援システム",
        url: "https://example-pharmatech.com",
        snippet: "調剤薬局向け業務支援システムを提供。2018年設立、従業員120名、売上高68億円、営業利益9億円。全国3500店舗以上の薬局が利用。",
        revenue_value: 68.0,
    },
    SeedEntry {
        title: "株式会社メディカルAI | 医療画像診断支援",
        url: "https://example-medical-ai.com",
        snippet: "AI医療画像診断支援システムを開発。2019年設立、従業員95名、売上高135億円、営業利益22億円。大学病院・総合病院150施設以上に導入。",
        revenue_value: 135.0,
    },
    SeedEntry {
        title: "株式会社ケアテック | 介護支援システム",
        url: "https://example-caretech.com",
        snippet: "介護施設向け管理システムを提供。2021年設立、従業員38名、売上高9億円、営業利益1億円。介護記録・請求業務のデジタル化を推進。",
        revenue_value: 9.0,
    },
];

const RETAIL: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社リテールテック | ECプラットフォーム",
        url: "https://example-retailtech.com",
        snippet: "EC構築・運営プラットフォームを提供。2018年設立、従業員110名、売上高58億円、営業利益7億円。D2Cブランド支援に注力。",
        revenue_value: 58.0,
    },
    SeedEntry {
        title: "株式会社オムニチャネルソリューションズ | 小売DX",
        url: "https://example-omnichannel.com",
        snippet: "小売店向けオムニチャネル支援システム。2019年設立、従業員75名、売上高34億円、営業利益4億円。実店舗とECの統合ソリューション提供。",
        revenue_value: 34.0,
    },
    SeedEntry {
        title: "株式会社スマートリテール | 無人店舗システム",
        url: "https://example-smartretail.com",
        snippet: "無人決済・店舗運営システムを開発。2020年設立、従業員48名、売上高15億円、営業利益1.8億円。コンビニ・スーパー向けに展開。",
        revenue_value: 15.0,
    },
    SeedEntry {
        title: "株式会社ファッションテック | アパレルDX",
        url: "https://example-fashiontech.com",
        snippet: "アパレル業界向け在庫管理・MD支援システム。2017年設立、従業員130名、売上高92億円、営業利益12億円。大手アパレル50社以上が利用。",
        revenue_value: 92.0,
    },
    SeedEntry {
        title: "株式会社マーケットプレイステック | フリマアプリ",
        url: "https://example-marketplace.com",
        snippet: "C2Cマーケットプレイスを運営。2019年設立、従業員62名、売上高7億円、営業利益0.7億円。特定ジャンルに特化したフリマサービス。",
        revenue_value: 7.0,
    },
];

const MANUFACTURING: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社スマートファクトリー | 製造業DX",
        url: "https://example-smartfactory.com",
        snippet: "製造業向けIoT・AI活用システムを提供。2018年設立、従業員95名、売上高48億円、営業利益6億円。工場の自動化・効率化を支援。",
        revenue_value: 48.0,
    },
    SeedEntry {
        title: "株式会社インダストリー4.0 | スマート製造",
        url: "https://example-industry40.com",
        snippet: "製造業向けデジタルツイン・予知保全システム。2019年設立、従業員72名、売上高28億円、営業利益3億円。製造ラインの最適化を実現。",
        revenue_value: 28.0,
    },
    SeedEntry {
        title: "株式会社プロダクションテック | 生産管理システム",
        url: "https://example-productiontech.com",
        snippet: "クラウド型生産管理システムを開発。2017年設立、従業員140名、売上高85億円、営業利益11億円。中堅製造業800社以上が導入。",
        revenue_value: 85.0,
    },
    SeedEntry {
        title: "株式会社3Dプリントイノベーション | 3D製造",
        url: "https://example-3dprint-innovation.com",
        snippet: "産業用3Dプリンティングサービス。2020年設立、従業員55名、売上高16億円、営業利益2億円。試作開発から量産まで対応。",
        revenue_value: 16.0,
    },
    SeedEntry {
        title: "株式会社ロボティクスソリューション | 産業ロボット",
        url: "https://example-robotics-solution.com",
        snippet: "協働ロボット・自動化システムを提供。2018年設立、従業員88名、売上高6億円、営業利益0.6億円。中小製造業向けロボット導入支援。",
        revenue_value: 6.0,
    },
];

const FOOD: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社フードテック | フードデリバリー",
        url: "https://example-foodtech.com",
        snippet: "クラウドキッチン・デリバリー最適化プラットフォーム。2019年設立、従業員78名、売上高45億円、営業利益5億円。飲食店のデリバリー売上向上を支援。",
        revenue_value: 45.0,
    },
    SeedEntry {
        title: "株式会社アグリテック | 農業DX",
        url: "https://example-agritech.com",
        snippet: "スマート農業・生産管理システムを提供。2020年設立、従業員52名、売上高22億円、営業利益2.5億円。IoTセンサーで農作物の最適管理を実現。",
        revenue_value: 22.0,
    },
    SeedEntry {
        title: "株式会社レストランマネジメントテック | 飲食店支援",
        url: "https://example-restaurant-management.com",
        snippet: "飲食店向け予約・在庫管理システム。2018年設立、従業員110名、売上高68億円、営業利益8億円。全国10000店舗以上が利用。",
        revenue_value: 68.0,
    },
    SeedEntry {
        title: "株式会社フードサプライチェーン | 食品流通DX",
        url: "https://example-food-supply.com",
        snippet: "食品流通・トレーサビリティシステム。2017年設立、従業員135名、売上高110億円、営業利益14億円。食の安全・効率化を推進。",
        revenue_value: 110.0,
    },
    SeedEntry {
        title: "株式会社ミールキット | 定期宅配サービス",
        url: "https://example-mealkit.com",
        snippet: "食材・ミールキット定期宅配サービス。2020年設立、従業員45名、売上高8億円、営業利益0.9億円。健康志向の顧客向けに展開。",
        revenue_value: 8.0,
    },
];

const EDUCATION: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社エドテック | オンライン学習プラットフォーム",
        url: "https://example-edtech.com",
        snippet: "AI活用オンライン学習プラットフォーム。2019年設立、従業員95名、売上高38億円、営業利益4億円。個別最適化された学習体験を提供。",
        revenue_value: 38.0,
    },
    SeedEntry {
        title: "株式会社プログラミング教育 | 子供向けプログラミング",
        url: "https://example-programming-edu.com",
        snippet: "子供向けプログラミング教育サービス。2018年設立、従業員68名、売上高24億円、営業利益3億円。全国150教室を展開。",
        revenue_value: 24.0,
    },
    SeedEntry {
        title: "株式会社スタディサポート | 学習管理システム",
        url: "https://example-studysupport.com",
        snippet: "学校・学習塾向け管理システム。2017年設立、従業員125名、売上高72億円、営業利益9億円。教育機関3000校以上が導入。",
        revenue_value: 72.0,
    },
    SeedEntry {
        title: "株式会社語学学習AI | AI英語学習",
        url: "https://example-language-ai.com",
        snippet: "AI活用の語学学習アプリ。2020年設立、従業員58名、売上高15億円、営業利益1.8億円。ユーザー数80万人突破。",
        revenue_value: 15.0,
    },
    SeedEntry {
        title: "株式会社キャリア教育テック | 就活支援",
        url: "https://example-career-edutech.com",
        snippet: "学生向けキャリア教育・就活支援プラットフォーム。2019年設立、従業員42名、売上高6億円、営業利益0.7億円。大学との連携を強化。",
        revenue_value: 6.0,
    },
];

const LOGISTICS: [SeedEntry; 5] = [
    SeedEntry {
        title: "株式会社ロジテック | 物流最適化",
        url: "https://example-logitech.com",
        snippet: "物流業務最適化システムを提供。2018年設立、従業員102名、売上高55億円、営業利益7億円。配送ルート最適化・倉庫管理を自動化。",
        revenue_value: 55.0,
    },
    SeedEntry {
        title: "株式会社ラストワンマイル | 配送DX",
        url: "https://example-lastmile.com",
        snippet: "ラストワンマイル配送マッチングプラットフォーム。2019年設立、従業員75名、売上高32億円、営業利益3.5億円。個人配送員と荷主をマッチング。",
        revenue_value: 32.0,
    },
    SeedEntry {
        title: "株式会社倉庫管理システムズ | WMS提供",
        url: "https://example-wms.com",
        snippet: "クラウド型倉庫管理システム（WMS）。2017年設立、従業員145名、売上高88億円、営業利益11億円。EC・小売業向けに特化。",
        revenue_value: 88.0,
    },
    SeedEntry {
        title: "株式会社トラックマッチング | 運送マッチング",
        url: "https://example-truck-matching.com",
        snippet: "運送業者とドライバーのマッチングプラットフォーム。2020年設立、従業員62名、売上高18億円、営業利益2億円。ドライバー不足解消に貢献。",
        revenue_value: 18.0,
    },
    SeedEntry {
        title: "株式会社ドローン配送 | 無人配送",
        url: "https://example-drone-delivery.com",
        snippet: "ドローン配送システムを開発。2021年設立、従業員38名、売上高5億円、営業利益0.5億円。過疎地域での実証実験を推進。",
        revenue_value: 5.0,
    },
];
