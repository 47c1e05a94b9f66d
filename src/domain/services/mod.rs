// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含抓取流水线的各个阶段服务：
/// - 提取服务（extraction_service）：从HTML中派生可见文本、mailto地址和链接列表
/// - 邮箱服务（email_service）：从文本中挖掘并清洗候选邮箱
/// - 社交服务（social_service）：将外链按社交平台分类
/// - 联系页选择器（contact_page_selector）：选择至多一个二级抓取页面
/// - 验证服务（validation_service）：并发验证候选邮箱域名的MX记录
/// - 抓取服务（scrape_service）：编排整条流水线并承担失败隔离策略
pub mod contact_page_selector;
pub mod email_service;
pub mod extraction_service;
pub mod scrape_service;
pub mod social_service;
pub mod validation_service;
